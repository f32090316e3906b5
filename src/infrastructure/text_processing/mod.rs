mod knowledge_file_loader;
mod recursive_character_splitter;
mod text_sanitizer;
mod text_splitter_factory;

pub use knowledge_file_loader::{
    KnowledgeLoadError, language_from_filename, load_knowledge_documents,
};
pub use recursive_character_splitter::{
    DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, DEFAULT_SEPARATORS, RecursiveCharacterSplitter,
};
pub use text_sanitizer::normalize_knowledge_text;
pub use text_splitter_factory::TextSplitterFactory;
