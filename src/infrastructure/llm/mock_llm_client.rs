use crate::application::ports::{LlmClient, LlmClientError};

/// Returns a fixed reply; used to exercise the analysis pipeline without a network.
pub struct MockLlmClient {
    reply: String,
}

impl MockLlmClient {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmClientError> {
        Ok(self.reply.clone())
    }
}
