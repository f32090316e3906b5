use async_trait::async_trait;

use crate::domain::ChatMessage;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Runs one chat completion over `messages` and returns the reply text.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
