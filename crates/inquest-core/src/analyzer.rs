use std::path::Path;

use serde::Serialize;

use crate::entities::extract_entities;
use crate::findings::extract_findings;
use crate::pdf::PdfBackend;
use crate::segment::{sentence_count, tokenize, word_count};
use crate::stopwords::StopWords;
use crate::summarize::{SummaryMethod, summarize};
use crate::AnalyzeError;

/// Per-category caps on reported metadata.
const MAX_DATES: usize = 3;
const MAX_PEOPLE: usize = 5;
const MAX_ORGANIZATIONS: usize = 3;
const MAX_LOCATIONS: usize = 3;

/// Structured metadata for one analyzed document.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub dates: Vec<String>,
    pub case_number: Option<String>,
    pub people: Vec<String>,
    pub organizations: Vec<String>,
    pub locations: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Statistics {
    pub word_count: usize,
    pub sentence_count: usize,
    /// Token count of the summary string.
    pub summary_length: usize,
}

/// The full result of analyzing one document.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub metadata: DocumentMetadata,
    pub summary: String,
    pub key_findings: Vec<String>,
    pub statistics: Statistics,
}

/// The analysis pipeline: text extraction, metadata, summary, findings,
/// statistics.
///
/// Constructed once at process start and shared immutably across request
/// handlers; holds no per-request state.
pub struct DocumentAnalyzer {
    stop_words: StopWords,
    summary_method: SummaryMethod,
}

impl Default for DocumentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentAnalyzer {
    pub fn new() -> Self {
        Self {
            stop_words: StopWords::for_forensic_documents(),
            summary_method: SummaryMethod::Hybrid,
        }
    }

    pub fn with_method(mut self, method: SummaryMethod) -> Self {
        self.summary_method = method;
        self
    }

    /// Analyze a PDF on disk. Backend failures are logged and treated as
    /// empty extractions; an empty extraction fails the analysis.
    pub fn analyze(
        &self,
        path: &Path,
        backend: &dyn PdfBackend,
        summary_len: usize,
    ) -> Result<AnalysisReport, AnalyzeError> {
        let text = match backend.extract_text(path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "PDF text extraction failed");
                String::new()
            }
        };
        self.analyze_text(&text, summary_len)
    }

    /// Analyze already-extracted text.
    pub fn analyze_text(
        &self,
        text: &str,
        summary_len: usize,
    ) -> Result<AnalysisReport, AnalyzeError> {
        if text.trim().is_empty() {
            return Err(AnalyzeError::EmptyDocument);
        }

        // Metadata, findings, and statistics work on the raw extracted
        // text; the summarizer normalizes its own input.
        let entities = extract_entities(text);
        let metadata = DocumentMetadata {
            dates: truncated(entities.dates, MAX_DATES),
            case_number: entities.case_ids.into_iter().next(),
            people: truncated(entities.people, MAX_PEOPLE),
            organizations: truncated(entities.organizations, MAX_ORGANIZATIONS),
            locations: truncated(entities.locations, MAX_LOCATIONS),
        };

        let summary = summarize(text, self.summary_method, summary_len, &self.stop_words);
        let key_findings = extract_findings(text);

        let statistics = Statistics {
            word_count: word_count(text),
            sentence_count: sentence_count(text),
            summary_length: tokenize(&summary).len(),
        };

        Ok(AnalysisReport {
            metadata,
            summary,
            key_findings,
            statistics,
        })
    }
}

fn truncated(mut values: Vec<String>, max: usize) -> Vec<String> {
    values.truncate(max);
    values
}
