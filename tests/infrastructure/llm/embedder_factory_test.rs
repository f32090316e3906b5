use travel_rag::infrastructure::llm::{EmbedderFactory, EmbedderFactoryError};
use travel_rag::presentation::config::{EmbeddingProvider, EmbeddingsSettings};

fn settings(provider: EmbeddingProvider, api_key: &str) -> EmbeddingsSettings {
    EmbeddingsSettings {
        provider,
        model: "text-embedding-3-small".to_string(),
        api_key: api_key.to_string(),
        base_url: None,
        azure_endpoint: None,
        api_version: None,
    }
}

#[test]
fn given_openai_provider_with_key_when_creating_then_succeeds() {
    let result = EmbedderFactory::create(&settings(EmbeddingProvider::OpenAi, "sk-test-key"));

    assert!(result.is_ok());
}

#[test]
fn given_openai_provider_with_empty_key_when_creating_then_returns_missing_key() {
    let result = EmbedderFactory::create(&settings(EmbeddingProvider::OpenAi, ""));

    assert!(matches!(result, Err(EmbedderFactoryError::MissingApiKey)));
}

#[test]
fn given_azure_provider_without_endpoint_when_creating_then_returns_missing_endpoint() {
    let result = EmbedderFactory::create(&settings(EmbeddingProvider::Azure, "azure-key"));

    assert!(matches!(result, Err(EmbedderFactoryError::MissingEndpoint)));
}

#[test]
fn given_azure_provider_with_endpoint_when_creating_then_succeeds() {
    let mut azure = settings(EmbeddingProvider::Azure, "azure-key");
    azure.azure_endpoint = Some("https://travel.openai.azure.com".to_string());

    assert!(EmbedderFactory::create(&azure).is_ok());
}
