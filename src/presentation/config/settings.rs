use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub qdrant: QdrantSettings,
    pub embeddings: EmbeddingsSettings,
    pub llm: LlmSettings,
    pub storage: StorageSettings,
    pub links: LinksSettings,
    pub logging: LoggingSettings,
    pub seeding: SeedingSettings,
}

impl Settings {
    /// Built-in defaults, then `appsettings.{Environment}` if present, then
    /// `APP__SECTION__KEY` variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::builder(environment)?
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Defaults and the environment file only, without process variables.
    pub fn load_from_files(environment: Environment) -> Result<Self, ConfigError> {
        Self::builder(environment)?.build()?.try_deserialize()
    }

    fn builder(
        environment: Environment,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("qdrant.url", "http://localhost:6334")?
            .set_default("qdrant.collection_name", "travel_knowledge")?
            .set_default("qdrant.vector_dimensions", 1536)?
            .set_default("embeddings.provider", "openai")?
            .set_default("embeddings.model", "text-embedding-3-small")?
            .set_default("embeddings.api_key", "")?
            .set_default("llm.provider", "openai")?
            .set_default("llm.api_key", "")?
            .set_default("llm.chat_model", "gpt-4o-mini")?
            .set_default("llm.max_tokens", 1000)?
            .set_default("llm.temperature", 0.7)?
            .set_default("storage.provider", "local")?
            .set_default("storage.local_path", "data")?
            .set_default("links.table_path", "data/external_links.json")?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .set_default("seeding.data_dir", "data/knowledge")?
            .set_default("seeding.chunk_size", 1000)?
            .set_default("seeding.chunk_overlap", 200)?
            .set_default("seeding.batch_size", 100)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            ))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QdrantSettings {
    /// Empty disables retrieval.
    pub url: String,
    pub collection_name: String,
    pub vector_dimensions: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingsSettings {
    pub provider: EmbeddingProvider,
    pub model: String,
    pub api_key: String,
    pub base_url: Option<String>,
    pub azure_endpoint: Option<String>,
    pub api_version: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingProvider {
    #[serde(rename = "openai")]
    OpenAi,
    Azure,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    pub api_key: String,
    /// Model name, or the deployment name for Azure.
    pub chat_model: String,
    pub base_url: Option<String>,
    pub azure_endpoint: Option<String>,
    pub api_version: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[serde(rename = "openai")]
    OpenAi,
    Azure,
    #[serde(rename = "lmstudio")]
    LmStudio,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub provider: StorageProviderSetting,
    pub local_path: String,
    pub azure_account: Option<String>,
    pub azure_access_key: Option<String>,
    pub azure_container: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProviderSetting {
    Local,
    Azure,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinksSettings {
    pub table_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedingSettings {
    pub data_dir: String,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub batch_size: usize,
}
