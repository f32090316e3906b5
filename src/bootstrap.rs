//! Wiring of adapters into services, shared by the server and seeding binaries.

use std::sync::Arc;

use tracing::{info, warn};

use crate::application::ports::{ConversationRepository, Embedder, LlmClient, VectorStore};
use crate::application::services::{
    ChatService, ContextRetriever, LinkAugmentor, ResponseOrchestrator,
};
use crate::infrastructure::links::load_topic_links;
use crate::infrastructure::llm::{EmbedderFactory, OpenAiChatClient};
use crate::infrastructure::persistence::{ObjectStoreConversationRepository, QdrantAdapter};
use crate::infrastructure::storage::ObjectStoreFactory;
use crate::presentation::AppState;
use crate::presentation::config::{QdrantSettings, Settings};

/// Returns the configured vector index, or `None` when `qdrant.url` is empty.
///
/// The collection is only probed for logging. An unreachable Qdrant or a collection
/// that has not been seeded yet keeps the adapter, and retrieval degrades per request
/// until the index answers.
pub async fn connect_vector_store(settings: &QdrantSettings) -> Option<Arc<dyn VectorStore>> {
    if settings.url.trim().is_empty() {
        warn!("qdrant.url is empty, answering without retrieved context");
        return None;
    }

    let adapter = match QdrantAdapter::new(&settings.url, settings.collection_name.clone()) {
        Ok(adapter) => adapter,
        Err(e) => {
            warn!(error = %e, "qdrant client construction failed, retrieval disabled");
            return None;
        }
    };

    match adapter.collection_exists().await {
        Ok(true) => info!(collection = %settings.collection_name, "vector index connected"),
        Ok(false) => warn!(
            collection = %settings.collection_name,
            "collection not found yet, answers stay ungrounded until seed_knowledge runs"
        ),
        Err(e) => warn!(error = %e, "qdrant not reachable at startup, retrying per request"),
    }

    Some(Arc::new(adapter))
}

/// Builds every long-lived component once and hands back the router state.
pub async fn build_app_state(settings: &Settings) -> anyhow::Result<AppState> {
    let embedder: Arc<dyn Embedder> = EmbedderFactory::create(&settings.embeddings)?;
    let llm_client: Arc<dyn LlmClient> = Arc::new(OpenAiChatClient::from_settings(&settings.llm)?);
    let vector_store = connect_vector_store(&settings.qdrant).await;
    let link_table = load_topic_links(&settings.links.table_path).await?;

    let object_store = ObjectStoreFactory::create(&settings.storage)?;
    let conversation_repository: Arc<dyn ConversationRepository> =
        Arc::new(ObjectStoreConversationRepository::new(object_store));

    let orchestrator = Arc::new(ResponseOrchestrator::new(
        ContextRetriever::new(embedder, vector_store),
        llm_client,
        LinkAugmentor::new(Arc::new(link_table)),
    ));

    let chat_service = Arc::new(ChatService::new(
        Arc::clone(&conversation_repository),
        orchestrator,
    ));

    Ok(AppState {
        chat_service,
        conversation_repository,
    })
}
