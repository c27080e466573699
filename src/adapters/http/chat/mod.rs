//! HTTP adapter for the design-intake chat endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ChatRequest, ChatResponse, ErrorResponse, HealthResponse};
pub use handlers::{health, post_chat, ChatApiError, ChatAppState};
pub use routes::chat_router;
