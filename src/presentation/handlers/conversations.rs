use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error_response::error_response;
use crate::domain::{Conversation, ConversationId, ConversationSummary, Language, MessageRole};
use crate::presentation::state::AppState;

pub const DEFAULT_LIST_LIMIT: usize = 50;

const STORAGE_ERROR: &str = "Conversation storage is unavailable, please try again later";

#[derive(Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct ConversationSummaryDto {
    pub conversation_id: String,
    pub title: String,
    pub last_message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub message_count: usize,
}

impl From<ConversationSummary> for ConversationSummaryDto {
    fn from(summary: ConversationSummary) -> Self {
        Self {
            conversation_id: summary.id.to_string(),
            title: summary.title,
            last_message: summary.last_message,
            created_at: summary.created_at,
            updated_at: summary.updated_at,
            message_count: summary.message_count,
        }
    }
}

#[derive(Serialize)]
pub struct ConversationDetailDto {
    pub conversation_id: String,
    pub title: String,
    pub messages: Vec<MessageDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub language: Language,
}

#[derive(Serialize)]
pub struct MessageDto {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl From<Conversation> for ConversationDetailDto {
    fn from(conversation: Conversation) -> Self {
        Self {
            conversation_id: conversation.id.to_string(),
            title: conversation.title,
            messages: conversation
                .turns
                .into_iter()
                .map(|t| MessageDto {
                    role: t.role,
                    content: t.content,
                    timestamp: t.created_at,
                })
                .collect(),
            created_at: conversation.created_at,
            updated_at: conversation.updated_at,
            language: conversation.language,
        }
    }
}

#[derive(Deserialize, Default)]
pub struct NewConversationRequest {
    #[serde(default)]
    pub language: Language,
}

#[derive(Serialize)]
pub struct NewConversationResponse {
    pub conversation_id: String,
}

#[derive(Deserialize)]
pub struct UpdateTitleRequest {
    pub title: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn parse_id(raw: &str) -> Result<ConversationId, Response> {
    raw.parse::<ConversationId>().map_err(|_| {
        tracing::warn!(conversation_id = %raw, "Invalid conversation id");
        error_response(StatusCode::BAD_REQUEST, "invalid conversation id")
    })
}

#[tracing::instrument(skip(state, query))]
pub async fn list_conversations_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> impl IntoResponse {
    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT);

    match state.conversation_repository.list_summaries(limit).await {
        Ok(summaries) => {
            tracing::debug!(count = summaries.len(), "Conversations listed");
            let body: Vec<ConversationSummaryDto> =
                summaries.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Listing conversations failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, STORAGE_ERROR)
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn get_conversation_handler(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_id(&conversation_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.conversation_repository.get(id).await {
        Ok(Some(conversation)) => {
            (StatusCode::OK, Json(ConversationDetailDto::from(conversation))).into_response()
        }
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Conversation not found"),
        Err(e) => {
            tracing::error!(error = %e, "Loading conversation failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, STORAGE_ERROR)
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn delete_conversation_handler(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_id(&conversation_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.conversation_repository.delete(id).await {
        Ok(true) => {
            tracing::info!(conversation_id = %id, "Conversation deleted");
            (
                StatusCode::OK,
                Json(MessageResponse {
                    message: "Conversation deleted successfully".to_string(),
                }),
            )
                .into_response()
        }
        Ok(false) => error_response(StatusCode::NOT_FOUND, "Conversation not found"),
        Err(e) => {
            tracing::error!(error = %e, "Deleting conversation failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, STORAGE_ERROR)
        }
    }
}

/// Accepts an empty body or `{"language": ...}`.
#[tracing::instrument(skip(state, body))]
pub async fn create_conversation_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> impl IntoResponse {
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        NewConversationRequest::default()
    } else {
        match serde_json::from_slice::<NewConversationRequest>(&body) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "Invalid new conversation body");
                return error_response(StatusCode::BAD_REQUEST, "invalid request body");
            }
        }
    };

    match state.conversation_repository.create(request.language).await {
        Ok(id) => {
            tracing::info!(conversation_id = %id, "Conversation created");
            (
                StatusCode::OK,
                Json(NewConversationResponse {
                    conversation_id: id.to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Creating conversation failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, STORAGE_ERROR)
        }
    }
}

/// Unknown ids are accepted and left untouched.
#[tracing::instrument(skip(state, request))]
pub async fn update_title_handler(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
    Json(request): Json<UpdateTitleRequest>,
) -> impl IntoResponse {
    let id = match parse_id(&conversation_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let title = request.title.trim();
    if title.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "title must not be empty");
    }

    match state.conversation_repository.set_title(id, title).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Updating conversation title failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, STORAGE_ERROR)
        }
    }
}
