mod conversation_record;
mod object_store_conversation_repository;
mod qdrant_adapter;

pub use conversation_record::{ConversationRecord, SCHEMA_VERSION, TurnRecord};
pub use object_store_conversation_repository::ObjectStoreConversationRepository;
pub use qdrant_adapter::QdrantAdapter;
