mod chat;
mod conversations;
mod error_response;
mod health;

pub use chat::{ChatRequest, ChatResponse, MAX_MESSAGE_CHARS, chat_handler};
pub use conversations::{
    DEFAULT_LIST_LIMIT, create_conversation_handler, delete_conversation_handler,
    get_conversation_handler, list_conversations_handler, update_title_handler,
};
pub use error_response::ErrorResponse;
pub use health::health_handler;
