use reqwest::RequestBuilder;

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_AZURE_API_VERSION: &str = "2024-02-01";

/// How a provider expects the API key.
#[derive(Clone)]
pub enum ApiAuth {
    Bearer(String),
    AzureKey(String),
}

impl ApiAuth {
    pub fn apply(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            ApiAuth::Bearer(key) if key.is_empty() => request,
            ApiAuth::Bearer(key) => request.header("Authorization", format!("Bearer {}", key)),
            ApiAuth::AzureKey(key) => request.header("api-key", key),
        }
    }
}
