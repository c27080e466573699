//! Intake session record.
//!
//! Tracks one user's traversal of the stage graph, independent of where
//! the record is stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::SessionId;

use super::history::History;
use super::stage::{GeneratedStage, StageDefinition, StageId};

/// State of one in-progress intake conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeSession {
    pub id: SessionId,
    /// Raw key of the stage awaiting an answer. Kept as stored so that a
    /// record referring to a stage the catalog no longer has can be detected.
    pub current_stage: String,
    pub history: History,
    /// Question synthesized for this session and awaiting its answer.
    pub generated: Option<GeneratedStage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IntakeSession {
    /// Create a session positioned at the first stage.
    pub fn new(id: SessionId) -> Self {
        let now = Utc::now();
        Self {
            id,
            current_stage: StageId::Start.as_str().to_string(),
            history: History::new(),
            generated: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// The question that was shown for the active stage.
    ///
    /// Synthesized text takes precedence over the catalog prompt.
    pub fn presented_question(&self, definition: &StageDefinition) -> String {
        match &self.generated {
            Some(generated) if generated.stage == definition.id => generated.prompt.clone(),
            _ => definition.prompt.unwrap_or_default().to_string(),
        }
    }

    /// Make `stage` the active stage, dropping any synthesized question.
    pub fn move_to(&mut self, stage: StageId) {
        self.current_stage = stage.as_str().to_string();
        self.generated = None;
        self.updated_at = Utc::now();
    }

    /// Make a synthesized question the active stage.
    pub fn present(&mut self, generated: GeneratedStage) {
        self.current_stage = generated.stage.as_str().to_string();
        self.generated = Some(generated);
        self.updated_at = Utc::now();
    }
}
