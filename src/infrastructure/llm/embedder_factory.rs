use std::sync::Arc;

use crate::application::ports::Embedder;
use crate::presentation::config::{EmbeddingProvider, EmbeddingsSettings};

use super::OpenAiEmbedder;

pub struct EmbedderFactory;

#[derive(Debug, thiserror::Error)]
pub enum EmbedderFactoryError {
    #[error("missing API key: embeddings.api_key is required")]
    MissingApiKey,
    #[error("embeddings.azure_endpoint is required for the azure provider")]
    MissingEndpoint,
}

impl EmbedderFactory {
    pub fn create(settings: &EmbeddingsSettings) -> Result<Arc<dyn Embedder>, EmbedderFactoryError> {
        let key = Some(settings.api_key.clone())
            .filter(|k| !k.is_empty())
            .ok_or(EmbedderFactoryError::MissingApiKey)?;

        match settings.provider {
            EmbeddingProvider::OpenAi => {
                tracing::info!(model = %settings.model, "Using OpenAI embeddings");
                let embedder = match settings.base_url.as_deref().filter(|u| !u.is_empty()) {
                    Some(base_url) => {
                        OpenAiEmbedder::with_base_url(base_url, key, settings.model.clone())
                    }
                    None => OpenAiEmbedder::new(key, settings.model.clone()),
                };
                Ok(Arc::new(embedder))
            }
            EmbeddingProvider::Azure => {
                let endpoint = settings
                    .azure_endpoint
                    .as_deref()
                    .filter(|u| !u.is_empty())
                    .ok_or(EmbedderFactoryError::MissingEndpoint)?;
                tracing::info!(deployment = %settings.model, "Using Azure OpenAI embeddings");
                Ok(Arc::new(OpenAiEmbedder::azure(
                    endpoint,
                    settings.model.clone(),
                    key,
                    settings.api_version.as_deref(),
                )))
            }
        }
    }
}
