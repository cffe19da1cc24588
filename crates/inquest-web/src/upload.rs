use axum::extract::Multipart;
use thiserror::Error;

use inquest_core::DetailLevel;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UploadError {
    #[error("No file part")]
    NoFilePart,
    #[error("No selected file")]
    NoSelectedFile,
    #[error("File must be a PDF")]
    NotPdf,
    #[error("{0}")]
    Malformed(String),
}

/// The uploaded PDF with its client-supplied filename.
pub struct UploadedFile {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Parsed form fields from the multipart upload.
pub struct FormFields {
    pub file: UploadedFile,
    pub detail: DetailLevel,
    /// Accepted for forward compatibility; no processing uses it.
    pub target_language: Option<String>,
}

/// Parse a multipart form upload into structured form fields.
///
/// Validation order matches the API contract: a missing `file` part,
/// then an empty filename, then a non-`.pdf` filename (case-sensitive
/// suffix check).
pub async fn parse_multipart(mut multipart: Multipart) -> Result<FormFields, UploadError> {
    let mut file: Option<UploadedFile> = None;
    let mut detail = DetailLevel::Auto;
    let mut target_language: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::Malformed(format!("Failed to read form field: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| UploadError::Malformed(format!("Failed to read file data: {e}")))?
                    .to_vec();
                file = Some(UploadedFile { filename, data });
            }
            "summary_detail" => {
                let value = field.text().await.map_err(|e| {
                    UploadError::Malformed(format!("Failed to read summary_detail: {e}"))
                })?;
                detail = DetailLevel::parse(&value);
            }
            "target_language" => {
                let value = field.text().await.map_err(|e| {
                    UploadError::Malformed(format!("Failed to read target_language: {e}"))
                })?;
                if !value.is_empty() {
                    target_language = Some(value);
                }
            }
            _ => {
                // Ignore unknown fields
                let _ = field.bytes().await;
            }
        }
    }

    let file = file.ok_or(UploadError::NoFilePart)?;
    if file.filename.is_empty() {
        return Err(UploadError::NoSelectedFile);
    }
    if !file.filename.ends_with(".pdf") {
        return Err(UploadError::NotPdf);
    }

    Ok(FormFields {
        file,
        detail,
        target_language,
    })
}
