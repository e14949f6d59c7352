use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{AnalysisRequest, FeedbackRecord};

use super::baseline::baseline_feedback;
use super::feedback_normalizer::normalize;
use super::prompt_builder::build_prompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeedbackSource {
    #[serde(rename = "AI Analysis")]
    Ai,
    #[serde(rename = "Demo Analysis")]
    Demo,
}

#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub feedback: FeedbackRecord,
    pub source: FeedbackSource,
    pub note: Option<String>,
}

/// Sends résumé text to the configured model and normalizes the reply.
///
/// With no client configured every request is answered from the baseline.
pub struct AnalysisService {
    llm_client: Option<Arc<dyn LlmClient>>,
    completion_timeout: Duration,
}

impl AnalysisService {
    pub fn new(llm_client: Option<Arc<dyn LlmClient>>, completion_timeout: Duration) -> Self {
        Self {
            llm_client,
            completion_timeout,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.llm_client.is_some()
    }

    #[tracing::instrument(
        skip(self, request),
        fields(
            job_role = %request.job_role,
            experience_level = %request.experience_level,
            text_len = request.resume_text.len(),
        )
    )]
    pub async fn analyze(&self, request: &AnalysisRequest) -> AnalysisOutcome {
        let Some(client) = &self.llm_client else {
            tracing::info!("No LLM client configured, using demo analysis");
            return self.demo_outcome(
                request,
                "Using demo data - configure an LLM API key for AI analysis".to_string(),
            );
        };

        match self.complete(client.as_ref(), request).await {
            Ok(reply) => {
                tracing::debug!(reply_len = reply.len(), "LLM reply received");
                AnalysisOutcome {
                    feedback: normalize(&reply, &request.job_role),
                    source: FeedbackSource::Ai,
                    note: None,
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "LLM completion failed, using demo analysis");
                self.demo_outcome(request, format!("Using demo data due to: {e}"))
            }
        }
    }

    async fn complete(
        &self,
        client: &dyn LlmClient,
        request: &AnalysisRequest,
    ) -> Result<String, LlmClientError> {
        let prompt = build_prompt(request);
        tokio::time::timeout(self.completion_timeout, client.complete(&prompt))
            .await
            .map_err(|_| LlmClientError::Timeout(self.completion_timeout.as_secs()))?
    }

    fn demo_outcome(&self, request: &AnalysisRequest, note: String) -> AnalysisOutcome {
        AnalysisOutcome {
            feedback: baseline_feedback(
                &request.job_role,
                request.experience_level,
                &mut rand::thread_rng(),
            ),
            source: FeedbackSource::Demo,
            note: Some(note),
        }
    }
}
