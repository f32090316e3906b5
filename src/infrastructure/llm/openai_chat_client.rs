use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::endpoint::{ApiAuth, DEFAULT_AZURE_API_VERSION, OPENAI_BASE_URL};
use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::ChatMessage;
use crate::presentation::config::{LlmProvider, LlmSettings};

/// Chat completions over the OpenAI wire format, shared by OpenAI, Azure OpenAI and
/// LM Studio.
pub struct OpenAiChatClient {
    client: Client,
    url: String,
    auth: ApiAuth,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiChatClient {
    pub fn from_settings(settings: &LlmSettings) -> Result<Self, LlmClientFactoryError> {
        let (url, auth) = match settings.provider {
            LlmProvider::OpenAi => {
                let base = settings.base_url.as_deref().unwrap_or(OPENAI_BASE_URL);
                (
                    format!("{}/chat/completions", base.trim_end_matches('/')),
                    ApiAuth::Bearer(require_key(settings)?),
                )
            }
            LlmProvider::LmStudio => {
                let base = settings
                    .base_url
                    .as_deref()
                    .filter(|u| !u.is_empty())
                    .ok_or(LlmClientFactoryError::MissingSetting("llm.base_url"))?;
                (
                    format!("{}/chat/completions", base.trim_end_matches('/')),
                    ApiAuth::Bearer(settings.api_key.clone()),
                )
            }
            LlmProvider::Azure => {
                let endpoint = settings
                    .azure_endpoint
                    .as_deref()
                    .filter(|u| !u.is_empty())
                    .ok_or(LlmClientFactoryError::MissingSetting("llm.azure_endpoint"))?;
                let api_version = settings
                    .api_version
                    .as_deref()
                    .unwrap_or(DEFAULT_AZURE_API_VERSION);
                (
                    format!(
                        "{}/openai/deployments/{}/chat/completions?api-version={}",
                        endpoint.trim_end_matches('/'),
                        settings.chat_model,
                        api_version
                    ),
                    ApiAuth::AzureKey(require_key(settings)?),
                )
            }
        };

        Ok(Self {
            client: Client::new(),
            url,
            auth,
            model: settings.chat_model.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn require_key(settings: &LlmSettings) -> Result<String, LlmClientFactoryError> {
    Some(settings.api_key.clone())
        .filter(|k| !k.is_empty())
        .ok_or(LlmClientFactoryError::MissingSetting("llm.api_key"))
}

#[async_trait]
impl LlmClient for OpenAiChatClient {
    #[instrument(skip(self, messages), fields(model = %self.model, messages = messages.len()))]
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmClientError> {
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let request = self.client.post(&self.url).json(&request_body);
        let response = self
            .auth
            .apply(request)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        completion_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmClientError::InvalidResponse("empty choices".to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientFactoryError {
    #[error("{0} is required for the configured llm provider")]
    MissingSetting(&'static str),
}
