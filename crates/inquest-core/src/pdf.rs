use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
}

/// Trait for PDF text extraction backends.
///
/// Implementors provide the low-level text extraction step; everything
/// downstream (entities, summary, findings, statistics) lives in
/// [`crate::analyzer::DocumentAnalyzer`] and operates on plain text.
pub trait PdfBackend: Send + Sync {
    /// Extract the concatenated text content of all pages of a PDF file.
    fn extract_text(&self, path: &Path) -> Result<String, BackendError>;
}
