use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::services::FeedbackSource;
use crate::domain::{AnalysisRequest, ExperienceLevel, FeedbackRecord};
use crate::presentation::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequestBody {
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub job_role: Option<String>,
    #[serde(default)]
    pub experience_level: Option<String>,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub feedback: FeedbackRecord,
    pub source: FeedbackSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceivedFields {
    pub has_resume_text: bool,
    pub has_job_role: bool,
}

#[derive(Serialize)]
pub struct MissingFieldsResponse {
    pub error: String,
    pub received: ReceivedFields,
}

fn parse_level(raw: Option<&str>) -> ExperienceLevel {
    match raw {
        None => ExperienceLevel::default(),
        Some(label) => label.parse().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Unknown experience level, defaulting to Mid");
            ExperienceLevel::default()
        }),
    }
}

#[tracing::instrument(skip(state, body))]
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeRequestBody>,
) -> impl IntoResponse {
    let level = parse_level(body.experience_level.as_deref());
    let request = match AnalysisRequest::new(
        body.resume_text.unwrap_or_default(),
        body.job_role.unwrap_or_default(),
        level,
    ) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected analysis request");
            return (
                StatusCode::BAD_REQUEST,
                Json(MissingFieldsResponse {
                    error: "Resume text and job role are required".to_string(),
                    received: ReceivedFields {
                        has_resume_text: e.has_resume_text,
                        has_job_role: e.has_job_role,
                    },
                }),
            )
                .into_response();
        }
    };

    let outcome = state.analysis_service.analyze(&request).await;

    tracing::info!(
        source = ?outcome.source,
        score = outcome.feedback.score,
        "Analysis complete"
    );

    (
        StatusCode::OK,
        Json(AnalyzeResponse {
            success: true,
            feedback: outcome.feedback,
            source: outcome.source,
            note: outcome.note,
        }),
    )
        .into_response()
}
