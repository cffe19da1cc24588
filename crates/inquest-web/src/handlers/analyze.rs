use std::path::Path;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};
use chrono::Utc;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{AnalyzeResponse, DocumentInfo};
use crate::state::AppState;
use crate::upload;

/// `POST /api/analyze`: accept a PDF upload, run the analysis pipeline,
/// return the report. The uploaded file is deleted after processing on
/// success and failure alike.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let fields = upload::parse_multipart(multipart).await?;

    let id = Uuid::new_v4().to_string();
    let stored = state.upload_dir.join(format!("{id}.pdf"));

    tracing::info!(
        filename = %fields.file.filename,
        detail = fields.detail.as_str(),
        target_language = fields.target_language.as_deref().unwrap_or("original"),
        bytes = fields.file.data.len(),
        "analyzing uploaded document"
    );

    if let Err(e) = tokio::fs::write(&stored, &fields.file.data).await {
        // A failed write can still leave a partial file behind.
        remove_upload(&stored).await;
        return Err(ApiError::internal(format!("Failed to save upload: {e}")));
    }

    // Extraction and scoring are CPU/disk bound; keep them off the runtime.
    let analyzer = state.analyzer.clone();
    let backend = state.backend.clone();
    let path = stored.clone();
    let summary_len = fields.detail.sentence_target();
    let result = tokio::task::spawn_blocking(move || {
        analyzer.analyze(&path, backend.as_ref(), summary_len)
    })
    .await;

    // Cleanup runs before any error is returned.
    remove_upload(&stored).await;

    let report = match result {
        Ok(Ok(report)) => report,
        Ok(Err(e)) => return Err(ApiError::internal(e)),
        Err(e) => return Err(ApiError::internal(format!("Analysis task failed: {e}"))),
    };

    tracing::info!(
        words = report.statistics.word_count,
        summary_tokens = report.statistics.summary_length,
        findings = report.key_findings.len(),
        "analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        report,
        document: DocumentInfo {
            filename: fields.file.filename,
            analyzed_at: Utc::now().to_rfc3339(),
            id,
        },
    }))
}

/// Delete the temporary upload. A file that was never created is not an
/// error; anything else is logged and otherwise ignored.
async fn remove_upload(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!(path = %path.display(), error = %e, "failed to remove uploaded file");
        }
    }
}
