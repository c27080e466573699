//! Error types for the intake domain.
//!
//! Every variant describes a session whose state can no longer be advanced.
//! Callers recover by discarding the session, never by retrying.

use crate::domain::foundation::ValidationError;

use super::stage::StageId;

/// Reasons a session cannot be advanced.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum IntakeError {
    #[error("Unknown stage: {0}")]
    UnknownStage(String),

    #[error("Stage {0} does not accept answers")]
    NoSuccessor(StageId),

    #[error("Invalid stage transition: {0}")]
    InvalidTransition(String),

    #[error("No answer recorded for stage {0}")]
    MissingAnswer(StageId),
}

impl From<ValidationError> for IntakeError {
    fn from(err: ValidationError) -> Self {
        IntakeError::InvalidTransition(err.to_string())
    }
}
