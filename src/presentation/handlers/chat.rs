use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use super::error_response::error_response;
use crate::domain::{ConversationId, Language, LinkRecord, SourceSummary};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

pub const MAX_MESSAGE_CHARS: usize = 2000;

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation_id: Option<String>,
    #[serde(default)]
    pub language: Language,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub message: String,
    pub conversation_id: String,
    pub follow_up_questions: Vec<String>,
    pub sources: Vec<SourceDto>,
    pub links: Vec<LinkRecord>,
}

#[derive(Serialize)]
pub struct SourceDto {
    pub content: String,
    pub metadata: SourceMetadata,
}

#[derive(Serialize)]
pub struct SourceMetadata {
    pub source: String,
    pub language: String,
    pub score: f32,
}

impl From<SourceSummary> for SourceDto {
    fn from(summary: SourceSummary) -> Self {
        Self {
            content: summary.content,
            metadata: SourceMetadata {
                source: summary.source,
                language: summary.language,
                score: summary.score,
            },
        }
    }
}

#[tracing::instrument(skip(state, request), fields(language = %request.language))]
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    tracing::debug!(message = %sanitize_prompt(&request.message), "Processing chat message");

    if request.message.trim().is_empty() {
        tracing::warn!("Chat request with empty message");
        return error_response(StatusCode::BAD_REQUEST, "message must not be empty");
    }
    if request.message.chars().count() > MAX_MESSAGE_CHARS {
        tracing::warn!("Chat request message too long");
        return error_response(
            StatusCode::BAD_REQUEST,
            format!("message must be at most {} characters", MAX_MESSAGE_CHARS),
        );
    }

    let conversation_id = match request
        .conversation_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
    {
        Some(raw) => match raw.parse::<ConversationId>() {
            Ok(id) => Some(id),
            Err(_) => {
                tracing::warn!(conversation_id = %raw, "Invalid conversation id");
                return error_response(StatusCode::BAD_REQUEST, "invalid conversation_id");
            }
        },
        None => None,
    };

    match state
        .chat_service
        .handle(&request.message, conversation_id, request.language)
        .await
    {
        Ok(outcome) => {
            tracing::info!(
                conversation_id = %outcome.conversation_id,
                sources_count = outcome.result.sources.len(),
                "Chat exchange completed"
            );
            let result = outcome.result;
            (
                StatusCode::OK,
                Json(ChatResponse {
                    message: result.answer,
                    conversation_id: outcome.conversation_id.to_string(),
                    follow_up_questions: result.follow_up_questions,
                    sources: result.sources.into_iter().map(SourceDto::from).collect(),
                    links: result.links,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Chat exchange failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error processing chat, please try again later",
            )
        }
    }
}
