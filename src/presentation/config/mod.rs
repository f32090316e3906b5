mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    EmbeddingProvider, EmbeddingsSettings, LinksSettings, LlmProvider, LlmSettings,
    LoggingSettings, QdrantSettings, SeedingSettings, ServerSettings, Settings,
    StorageProviderSetting, StorageSettings,
};
