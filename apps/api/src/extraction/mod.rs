// Document text extraction (PDF, DOCX).
// Parsing is CPU-bound and blocking: callers on the async runtime must use
// tokio::task::spawn_blocking.

pub mod docx;
pub mod error;
pub mod pdf;

pub use error::ExtractionError;

/// Supported upload formats, chosen by filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Case-insensitive extension lookup. Legacy `.doc` is not supported.
    pub fn from_filename(filename: &str) -> Result<Self, ExtractionError> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("pdf") => Ok(Self::Pdf),
            Some("docx") => Ok(Self::Docx),
            _ => Err(ExtractionError::UnsupportedFormat(filename.to_string())),
        }
    }
}

/// Turns uploaded bytes into plain text. Swappable in `AppState`.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8], filename: &str) -> Result<String, ExtractionError>;
}

/// Default extractor backed by `pdf-extract` and the DOCX reader.
pub struct DocumentExtractor;

impl TextExtractor for DocumentExtractor {
    fn extract(&self, bytes: &[u8], filename: &str) -> Result<String, ExtractionError> {
        extract_text(bytes, filename)
    }
}

/// Extracts plain text from a document. The result may be empty or whitespace-only
/// when the document has no text layer; judging that is left to the caller.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<String, ExtractionError> {
    match DocumentFormat::from_filename(filename)? {
        DocumentFormat::Pdf => pdf::extract_pdf_text(bytes),
        DocumentFormat::Docx => docx::extract_docx_text(bytes),
    }
}
