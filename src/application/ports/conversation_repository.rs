use async_trait::async_trait;

use crate::domain::{Conversation, ConversationId, ConversationSummary, Language, MessageRole};

/// Both turns of one chat exchange, committed in a single write.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub language: Language,
    pub user_content: String,
    pub assistant_content: String,
    /// Title to apply in the same write, if any.
    pub title: Option<String>,
}

#[async_trait]
pub trait ConversationRepository: Send + Sync {
    async fn create(&self, language: Language) -> Result<ConversationId, ConversationStoreError>;

    /// `Ok(None)` for unknown ids and for records that fail to parse.
    async fn get(&self, id: ConversationId)
    -> Result<Option<Conversation>, ConversationStoreError>;

    async fn list_summaries(
        &self,
        limit: usize,
    ) -> Result<Vec<ConversationSummary>, ConversationStoreError>;

    /// Creates the conversation first when `id` is unknown.
    async fn append_turn(
        &self,
        id: ConversationId,
        role: MessageRole,
        content: &str,
        language: Language,
    ) -> Result<(), ConversationStoreError>;

    /// Appends the user turn then the assistant turn, creating the conversation if needed.
    async fn append_exchange(
        &self,
        id: ConversationId,
        exchange: &Exchange,
    ) -> Result<(), ConversationStoreError>;

    /// No-op for unknown ids.
    async fn set_title(&self, id: ConversationId, title: &str)
    -> Result<(), ConversationStoreError>;

    async fn delete(&self, id: ConversationId) -> Result<bool, ConversationStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ConversationStoreError {
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
    #[error("malformed record: {0}")]
    MalformedRecord(String),
}
