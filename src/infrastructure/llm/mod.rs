mod embedder_factory;
mod endpoint;
mod openai_chat_client;
mod openai_embedder;

pub use embedder_factory::{EmbedderFactory, EmbedderFactoryError};
pub use openai_chat_client::{LlmClientFactoryError, OpenAiChatClient};
pub use openai_embedder::OpenAiEmbedder;
