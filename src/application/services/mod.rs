mod chat_service;
mod context_retriever;
mod knowledge_seeder;
mod link_augmentor;
mod prompt_assembler;
mod prompt_templates;
mod response_orchestrator;

pub use chat_service::{ChatOutcome, ChatService, ChatServiceError};
pub use context_retriever::{ContextRetriever, DEFAULT_TOP_K, RetrievedContext};
pub use knowledge_seeder::{DEFAULT_BATCH_SIZE, KnowledgeSeeder, SeedError, SeedReport};
pub use link_augmentor::{LINK_TRIGGER_KEYWORDS, LinkAugmentor, MAX_LINKS, wants_links};
pub use prompt_assembler::{HISTORY_WINDOW, assemble_prompt};
pub use prompt_templates::apology;
pub use response_orchestrator::{
    MAX_FOLLOW_UPS, ResponseOrchestrator, parse_follow_ups, render_links,
};
