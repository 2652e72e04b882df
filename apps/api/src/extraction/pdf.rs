use tracing::debug;

use crate::extraction::error::ExtractionError;

/// Extracts the text layer of an in-memory PDF.
///
/// Scanned (image-only) PDFs have no text layer and yield an empty string.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;
    debug!("Extracted {} chars from PDF", text.len());
    Ok(text)
}
