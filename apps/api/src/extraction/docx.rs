//! DOCX text extraction.
//!
//! A DOCX file is a zip container; the body lives in `word/document.xml`.
//! Text runs (`w:t`) are concatenated and every paragraph (`w:p`) ends with a newline.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use crate::extraction::error::ExtractionError;

const DOCUMENT_PART: &str = "word/document.xml";

/// Upper bound on the decompressed size of `word/document.xml`.
pub const MAX_DOCUMENT_XML_BYTES: u64 = 32 * 1024 * 1024;

pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let xml = read_document_part(bytes, MAX_DOCUMENT_XML_BYTES)?;
    let text = document_xml_to_text(&xml)?;
    debug!("Extracted {} chars from DOCX", text.len());
    Ok(text)
}

/// Reads the document part, refusing to inflate more than `limit` bytes.
fn read_document_part(bytes: &[u8], limit: u64) -> Result<String, ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractionError::Docx(format!("not a valid DOCX container: {e}")))?;

    let part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractionError::Docx(format!("missing {DOCUMENT_PART}: {e}")))?;
    if part.size() > limit {
        return Err(too_large(limit));
    }

    // Declared sizes are untrusted; bound the read too.
    let mut xml = String::new();
    part.take(limit + 1)
        .read_to_string(&mut xml)
        .map_err(|e| ExtractionError::Docx(format!("failed to read {DOCUMENT_PART}: {e}")))?;
    if xml.len() as u64 > limit {
        return Err(too_large(limit));
    }
    Ok(xml)
}

fn too_large(limit: u64) -> ExtractionError {
    ExtractionError::Docx(format!("{DOCUMENT_PART} expands beyond {limit} bytes"))
}

fn document_xml_to_text(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut text = String::new();
    let mut in_run_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"w:t" => in_run_text = true,
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"w:t" => in_run_text = false,
                b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" | b"w:p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_run_text => {
                let run = e
                    .unescape()
                    .map_err(|err| ExtractionError::Docx(format!("bad text run: {err}")))?;
                text.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ExtractionError::Docx(format!(
                    "malformed XML at position {}: {e}",
                    reader.error_position()
                )))
            }
            _ => {}
        }
    }

    Ok(text)
}
