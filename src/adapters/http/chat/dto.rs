//! Request and response DTOs for the chat endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::intake::DialogueReply;

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/chat`.
///
/// `session_id` is optional at the wire level so a missing id can be answered
/// with a 400 body of our own instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

/// Body returned for every processed message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatResponse {
    #[serde(rename_all = "camelCase")]
    Question {
        session_id: String,
        question: String,
        options: Vec<String>,
        is_free_text: bool,
        is_complete: bool,
    },
    #[serde(rename_all = "camelCase")]
    Complete {
        session_id: String,
        question: String,
        is_complete: bool,
        final_prompt: String,
    },
    Failed {
        error: String,
    },
}

impl From<DialogueReply> for ChatResponse {
    fn from(reply: DialogueReply) -> Self {
        match reply {
            DialogueReply::Question {
                session_id,
                question,
                options,
                is_free_text,
            } => ChatResponse::Question {
                session_id: session_id.into(),
                question,
                options,
                is_free_text,
                is_complete: false,
            },
            DialogueReply::Complete {
                session_id,
                question,
                final_prompt,
            } => ChatResponse::Complete {
                session_id: session_id.into(),
                question,
                is_complete: true,
                final_prompt,
            },
            DialogueReply::Failed { error } => ChatResponse::Failed { error },
        }
    }
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub active_sessions: usize,
}

impl HealthResponse {
    pub fn ok(active_sessions: usize) -> Self {
        Self {
            status: "ok".to_string(),
            active_sessions,
        }
    }
}

/// Error body for rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}
