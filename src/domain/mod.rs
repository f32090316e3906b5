mod chat_message;
mod chunk;
mod conversation;
mod conversation_id;
mod embedding;
mod language;
mod link_record;
mod message_role;
mod passage;
mod response_result;
pub mod text;
mod topic_links;
mod turn;

pub use chat_message::ChatMessage;
pub use chunk::{Chunk, ChunkId, KnowledgeDocument};
pub use conversation::{
    Conversation, ConversationSummary, DEFAULT_TITLE, PREVIEW_CHARS, TITLE_CHARS,
    title_from_first_message,
};
pub use conversation_id::ConversationId;
pub use embedding::Embedding;
pub use language::Language;
pub use link_record::{DEFAULT_LINK_TYPE, LinkRecord};
pub use message_role::MessageRole;
pub use passage::{RetrievedPassage, SOURCE_PREVIEW_CHARS, SourceSummary};
pub use response_result::ResponseResult;
pub use topic_links::{TopicLinkEntry, TopicLinkTable};
pub use turn::Turn;
