mod collection_config;
mod conversation_repository;
mod distance_metric;
mod embedder;
mod llm_client;
mod payload_field_type;
mod payload_index;
mod search_result;
mod text_splitter;
mod vector_store;
mod vector_store_error;

pub use collection_config::CollectionConfig;
pub use conversation_repository::{ConversationRepository, ConversationStoreError, Exchange};
pub use distance_metric::DistanceMetric;
pub use embedder::{Embedder, EmbedderError};
pub use llm_client::{LlmClient, LlmClientError};
pub use payload_field_type::PayloadFieldType;
pub use payload_index::PayloadIndex;
pub use search_result::SearchResult;
pub use text_splitter::{TextSplitter, TextSplitterError};
pub use vector_store::VectorStore;
pub use vector_store_error::VectorStoreError;
