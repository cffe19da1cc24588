use serde::Serialize;

use inquest_core::AnalysisReport;

/// Error body for every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Request-level fields attached to a successful analysis.
#[derive(Debug, Serialize)]
pub struct DocumentInfo {
    /// Client-supplied filename, echoed back.
    pub filename: String,
    /// ISO-8601 timestamp of the analysis.
    pub analyzed_at: String,
    /// Generated UUID; also named the temporary upload file.
    pub id: String,
}

/// Success body for `POST /api/analyze`.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(flatten)]
    pub report: AnalysisReport,
    pub document: DocumentInfo,
}
