//! Mock PDF backend for testing.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use inquest_core::{BackendError, PdfBackend};

/// A canned response for [`MockBackend`].
#[derive(Clone, Debug)]
pub enum MockResponse {
    /// Return this text for every extraction.
    Text(String),
    /// Fail every extraction with this message.
    Error(String),
}

/// A hand-rolled [`PdfBackend`] for tests: returns a canned response and
/// counts calls, so pipeline and HTTP tests run without real PDFs.
pub struct MockBackend {
    response: MockResponse,
    call_count: AtomicUsize,
}

impl MockBackend {
    /// A backend that extracts `text` from any path.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            response: MockResponse::Text(text.into()),
            call_count: AtomicUsize::new(0),
        }
    }

    /// A backend that fails every extraction.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: MockResponse::Error(message.into()),
            call_count: AtomicUsize::new(0),
        }
    }

    /// Number of `extract_text` calls so far.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl PdfBackend for MockBackend {
    fn extract_text(&self, _path: &Path) -> Result<String, BackendError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        match &self.response {
            MockResponse::Text(text) => Ok(text.clone()),
            MockResponse::Error(message) => {
                Err(BackendError::ExtractionError(message.clone()))
            }
        }
    }
}
