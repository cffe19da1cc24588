use std::path::PathBuf;
use std::sync::Arc;

use inquest_core::{DocumentAnalyzer, PdfBackend};

/// Shared application state accessible from all handlers.
///
/// The analyzer (and its stop-word set) is built once at startup and only
/// read afterwards; the upload directory is the single piece of shared
/// mutable state, and per-request UUID filenames keep requests from
/// colliding in it.
pub struct AppState {
    pub analyzer: Arc<DocumentAnalyzer>,
    pub backend: Arc<dyn PdfBackend>,
    pub upload_dir: PathBuf,
}

impl AppState {
    pub fn new(backend: Arc<dyn PdfBackend>, upload_dir: PathBuf) -> Self {
        Self {
            analyzer: Arc::new(DocumentAnalyzer::new()),
            backend,
            upload_dir,
        }
    }
}
