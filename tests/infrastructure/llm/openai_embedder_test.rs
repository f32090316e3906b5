use travel_rag::application::ports::Embedder;
use travel_rag::infrastructure::llm::OpenAiEmbedder;

#[test]
fn given_default_constructor_when_created_then_targets_openai_embeddings() {
    let embedder = OpenAiEmbedder::new("sk-test".to_string(), "text-embedding-3-small".to_string());

    assert_eq!(embedder.url(), "https://api.openai.com/v1/embeddings");
}

#[test]
fn given_base_url_with_trailing_slash_when_created_then_joins_cleanly() {
    let embedder = OpenAiEmbedder::with_base_url(
        "http://localhost:1234/v1/",
        String::new(),
        "nomic-embed-text".to_string(),
    );

    assert_eq!(embedder.url(), "http://localhost:1234/v1/embeddings");
}

#[test]
fn given_azure_deployment_when_created_then_url_carries_deployment_and_version() {
    let embedder = OpenAiEmbedder::azure(
        "https://travel.openai.azure.com/",
        "embed-small".to_string(),
        "azure-key".to_string(),
        None,
    );

    assert_eq!(
        embedder.url(),
        "https://travel.openai.azure.com/openai/deployments/embed-small/embeddings?api-version=2024-02-01"
    );
}

#[tokio::test]
async fn given_unreachable_endpoint_when_embedding_then_returns_error() {
    let embedder = OpenAiEmbedder::with_base_url(
        "http://127.0.0.1:9",
        "sk-invalid".to_string(),
        "text-embedding-3-small".to_string(),
    );

    assert!(embedder.embed("Ha Long Bay").await.is_err());
}
