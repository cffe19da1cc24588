use thiserror::Error;

pub mod analyzer;
pub mod entities;
pub mod findings;
pub mod pdf;
pub mod segment;
pub mod stopwords;
pub mod summarize;
pub mod text;

pub use analyzer::{AnalysisReport, DocumentAnalyzer, DocumentMetadata, Statistics};
pub use entities::{ExtractedEntities, extract_entities};
pub use findings::extract_findings;
pub use pdf::{BackendError, PdfBackend};
pub use stopwords::StopWords;
pub use summarize::{SummaryMethod, summarize};
pub use text::preprocess_text;

/// User-facing summary granularity, mapped to a sentence-count target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailLevel {
    Brief,
    Standard,
    Detailed,
    Comprehensive,
    #[default]
    Auto,
}

impl DetailLevel {
    /// Parse a form value. Unknown or missing values fall back to `Auto`.
    pub fn parse(value: &str) -> Self {
        match value {
            "brief" => DetailLevel::Brief,
            "standard" => DetailLevel::Standard,
            "detailed" => DetailLevel::Detailed,
            "comprehensive" => DetailLevel::Comprehensive,
            _ => DetailLevel::Auto,
        }
    }

    /// Number of sentences the summarizer should aim for.
    pub fn sentence_target(self) -> usize {
        match self {
            DetailLevel::Brief => 3,
            DetailLevel::Standard => 5,
            DetailLevel::Detailed => 8,
            DetailLevel::Comprehensive => 12,
            DetailLevel::Auto => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DetailLevel::Brief => "brief",
            DetailLevel::Standard => "standard",
            DetailLevel::Detailed => "detailed",
            DetailLevel::Comprehensive => "comprehensive",
            DetailLevel::Auto => "auto",
        }
    }
}

/// Terminal failure of a document analysis.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// Extraction produced no text (unreadable or empty PDF).
    #[error("Could not extract text from PDF")]
    EmptyDocument,
    #[error("{0}")]
    Backend(#[from] BackendError),
}
