use std::path::Path;

use inquest_core::{BackendError, PdfBackend};

pub mod mock;

pub use mock::MockBackend;

/// Pure-Rust implementation of [`PdfBackend`] on top of the `pdf-extract`
/// crate.
///
/// Kept in its own crate so the analysis pipeline and the HTTP layer do
/// not depend on the PDF stack directly; tests swap in [`MockBackend`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractBackend;

impl PdfExtractBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for PdfExtractBackend {
    fn extract_text(&self, path: &Path) -> Result<String, BackendError> {
        let bytes = std::fs::read(path).map_err(|e| BackendError::OpenError(e.to_string()))?;
        let text = pdf_extract::extract_text_from_mem(&bytes)
            .map_err(|e| BackendError::ExtractionError(e.to_string()))?;
        tracing::debug!(
            path = %path.display(),
            chars = text.len(),
            "extracted PDF text"
        );
        Ok(text)
    }
}
