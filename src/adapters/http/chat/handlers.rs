//! HTTP handlers for the chat endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::{ProcessMessageCommand, ProcessMessageError, ProcessMessageHandler};
use crate::domain::foundation::SessionId;
use crate::ports::{SessionStore, SessionStoreError};

use super::dto::{ChatRequest, ChatResponse, ErrorResponse, HealthResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ChatAppState {
    pub handler: Arc<ProcessMessageHandler>,
    pub store: Arc<dyn SessionStore>,
}

impl ChatAppState {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            handler: Arc::new(ProcessMessageHandler::new(store.clone())),
            store,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/chat - Apply one message to a session
pub async fn post_chat(
    State(state): State<ChatAppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ChatApiError> {
    let session_id = req
        .session_id
        .as_deref()
        .and_then(|id| SessionId::new(id).ok())
        .ok_or_else(|| ChatApiError::BadRequest("Session ID is required.".to_string()))?;

    let cmd = ProcessMessageCommand {
        session_id,
        answer: req.answer,
    };

    let reply = state.handler.handle(cmd).await?;
    Ok(Json(reply.into()))
}

/// GET /api/health - Liveness and session count
pub async fn health(
    State(state): State<ChatAppState>,
) -> Result<Json<HealthResponse>, ChatApiError> {
    let active = state.store.count().await?;
    Ok(Json(HealthResponse::ok(active)))
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, thiserror::Error)]
pub enum ChatApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl From<ProcessMessageError> for ChatApiError {
    fn from(err: ProcessMessageError) -> Self {
        ChatApiError::Internal(err.to_string())
    }
}

impl From<SessionStoreError> for ChatApiError {
    fn from(err: SessionStoreError) -> Self {
        ChatApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ChatApiError {
    fn into_response(self) -> Response {
        match self {
            ChatApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(message))).into_response()
            }
            ChatApiError::Internal(message) => {
                tracing::error!(error = %message, "Chat request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::internal("Internal server error")),
                )
                    .into_response()
            }
        }
    }
}
