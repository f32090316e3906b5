use std::sync::Arc;

use tracing::{error, info, instrument};

use super::response_orchestrator::ResponseOrchestrator;
use crate::application::ports::{ConversationRepository, ConversationStoreError, Exchange};
use crate::domain::{ConversationId, Language, ResponseResult, title_from_first_message};

#[derive(Debug, Clone)]
pub struct ChatOutcome {
    pub conversation_id: ConversationId,
    pub result: ResponseResult,
}

/// One chat exchange: load history, answer, then persist both turns.
pub struct ChatService {
    conversation_repository: Arc<dyn ConversationRepository>,
    orchestrator: Arc<ResponseOrchestrator>,
}

impl ChatService {
    pub fn new(
        conversation_repository: Arc<dyn ConversationRepository>,
        orchestrator: Arc<ResponseOrchestrator>,
    ) -> Self {
        Self {
            conversation_repository,
            orchestrator,
        }
    }

    #[instrument(skip(self, message, conversation_id, language), fields(conversation_id, language = %language))]
    pub async fn handle(
        &self,
        message: &str,
        conversation_id: Option<ConversationId>,
        language: Language,
    ) -> Result<ChatOutcome, ChatServiceError> {
        let conversation_id = conversation_id.unwrap_or_default();
        tracing::Span::current().record("conversation_id", tracing::field::display(conversation_id));

        let history = self
            .conversation_repository
            .get(conversation_id)
            .await
            .map_err(ChatServiceError::Storage)?
            .map(|c| c.turns)
            .unwrap_or_default();

        let result = self.orchestrator.generate(message, &history, language).await;

        let exchange = Exchange {
            language,
            user_content: message.to_string(),
            assistant_content: result.answer.clone(),
            title: history
                .is_empty()
                .then(|| title_from_first_message(message)),
        };

        // Detached so the exchange is committed even if this request is dropped.
        let repository = Arc::clone(&self.conversation_repository);
        let write = tokio::spawn(async move {
            repository.append_exchange(conversation_id, &exchange).await
        });

        match write.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                error!(error = %e, "failed to persist chat exchange");
                return Err(ChatServiceError::Storage(e));
            }
            Err(e) => {
                error!(error = %e, "persistence task aborted");
                return Err(ChatServiceError::Storage(
                    ConversationStoreError::StorageUnavailable(e.to_string()),
                ));
            }
        }

        info!(fresh = history.is_empty(), "chat exchange stored");

        Ok(ChatOutcome {
            conversation_id,
            result,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatServiceError {
    #[error("conversation storage: {0}")]
    Storage(ConversationStoreError),
}
