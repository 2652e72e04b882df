//! Axum route handlers for the Analysis API.

use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::scoring::Report;
use crate::state::AppState;

const FILE_FIELD: &str = "file";

/// A single uploaded document pulled out of the multipart body.
#[derive(Debug)]
pub struct Upload {
    pub filename: String,
    pub bytes: Bytes,
}

/// POST /analyze/
///
/// Extracts text from the uploaded PDF/DOCX and returns the scoring report.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Report>, AppError> {
    let upload = read_upload(&mut multipart, state.config.max_upload_bytes).await?;

    let span = info_span!("analyze", analysis_id = %Uuid::new_v4(), filename = %upload.filename);
    analyze_upload(state, upload).instrument(span).await.map(Json)
}

async fn analyze_upload(state: AppState, upload: Upload) -> Result<Report, AppError> {
    let extractor = Arc::clone(&state.extractor);
    let size = upload.bytes.len();
    let text = tokio::task::spawn_blocking(move || {
        extractor.extract(&upload.bytes, &upload.filename)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))??;

    if text.trim().is_empty() {
        info!("No text extracted from {size}-byte upload");
        return Err(AppError::EmptyExtraction);
    }

    let report = state.engine.score_resume(&text);
    info!(
        word_count = report.word_count,
        keywords_found = report.keywords_found,
        score = report.score,
        "Resume analyzed"
    );
    Ok(report)
}

/// Returns the first `file` field of the form. Other fields are skipped.
async fn read_upload(multipart: &mut Multipart, max_bytes: usize) -> Result<Upload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_bytes, "Invalid multipart body"))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field
            .file_name()
            .map(String::from)
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| AppError::Validation("Uploaded file has no filename".to_string()))?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, max_bytes, "Failed to read uploaded file"))?;

        return Ok(Upload { filename, bytes });
    }

    Err(AppError::Validation(format!(
        "Missing '{FILE_FIELD}' field in multipart form"
    )))
}

/// Body-limit failures become 413; every other multipart failure is a client error.
fn multipart_error(err: MultipartError, max_bytes: usize, context: &str) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(max_bytes)
    } else {
        AppError::Validation(format!("{context}: {}", err.body_text()))
    }
}
