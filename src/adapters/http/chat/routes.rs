//! Route configuration for chat endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{health, post_chat, ChatAppState};

/// Creates the chat router.
///
/// Routes:
/// - `POST /api/chat` - Apply one message to a session
/// - `GET /api/health` - Liveness and active session count
///
/// Rejected requests (400, 500) carry `{code, message}`. A bare `{error}`
/// body is only sent with 200, for a session that had to be discarded.
pub fn chat_router() -> Router<ChatAppState> {
    Router::new()
        .route("/api/chat", post(post_chat))
        .route("/api/health", get(health))
}
