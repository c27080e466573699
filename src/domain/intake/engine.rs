//! Dialogue Engine - advances one session by one answer.
//!
//! Pure domain logic: no storage, no locking. The caller decides what to do
//! with the session after each step (keep it, or discard it when the reply
//! is terminal or an [`IntakeError`] is returned).

use crate::domain::foundation::{SessionId, StateMachine};

use super::catalog::{StageCatalog, COMPLETION_ACKNOWLEDGEMENT, RESTART_MESSAGE};
use super::errors::IntakeError;
use super::session::IntakeSession;
use super::stage::{StageDefinition, StageId, Transition};

/// Outcome of processing one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogueReply {
    /// The session awaits an answer to this question.
    Question {
        session_id: SessionId,
        question: String,
        options: Vec<String>,
        is_free_text: bool,
    },
    /// The session finished and has been compiled into a prompt.
    Complete {
        session_id: SessionId,
        question: String,
        final_prompt: String,
    },
    /// The session was corrupted and has been discarded.
    Failed { error: String },
}

impl DialogueReply {
    /// Reply sent after discarding a session that could not be advanced.
    pub fn restart() -> Self {
        DialogueReply::Failed {
            error: RESTART_MESSAGE.to_string(),
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, DialogueReply::Complete { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, DialogueReply::Failed { .. })
    }
}

/// Walks sessions through a stage catalog.
#[derive(Debug, Clone, Copy)]
pub struct DialogueEngine {
    catalog: &'static StageCatalog,
}

impl DialogueEngine {
    /// Engine over the standard design-intake catalog.
    pub fn new() -> Self {
        Self::with_catalog(StageCatalog::standard())
    }

    pub fn with_catalog(catalog: &'static StageCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'static StageCatalog {
        self.catalog
    }

    /// Creates a session and returns the opening question.
    ///
    /// The first message of a session carries no answer; whatever the caller
    /// sent alongside it is not consumed.
    pub fn open(&self, session_id: SessionId) -> Result<(IntakeSession, DialogueReply), IntakeError> {
        let start = self
            .catalog
            .get(StageId::Start)
            .ok_or_else(|| IntakeError::UnknownStage(StageId::Start.to_string()))?;
        let session = IntakeSession::new(session_id);
        let reply = Self::ask(&session.id, start);
        Ok((session, reply))
    }

    /// Applies one answer to the session's active stage.
    ///
    /// On success the session has moved exactly one answerable stage forward
    /// (passing through a generating stage if one lies in between).
    ///
    /// # Errors
    /// Any `IntakeError` means the session is corrupted and must be discarded.
    pub fn advance(
        &self,
        session: &mut IntakeSession,
        answer: Option<&str>,
    ) -> Result<DialogueReply, IntakeError> {
        let answer = answer.unwrap_or_default();
        let current = self.catalog.resolve(&session.current_stage)?;

        let question = session.presented_question(current);
        session.history.record(current.id, question, answer);

        let next_id = current
            .successor(answer)
            .ok_or(IntakeError::NoSuccessor(current.id))?;
        current.id.transition_to(next_id)?;
        session.move_to(next_id);

        let next = self
            .catalog
            .get(next_id)
            .ok_or_else(|| IntakeError::UnknownStage(next_id.to_string()))?;

        match next.transition {
            Transition::Generate(generate) => {
                let generated = generate(&session.history)?;
                next_id.transition_to(generated.stage)?;
                let reply = DialogueReply::Question {
                    session_id: session.id.clone(),
                    question: generated.prompt.clone(),
                    options: generated.options.clone(),
                    is_free_text: false,
                };
                session.present(generated);
                Ok(reply)
            }
            Transition::Finish(finalize) => Ok(DialogueReply::Complete {
                session_id: session.id.clone(),
                question: COMPLETION_ACKNOWLEDGEMENT.to_string(),
                final_prompt: finalize(&session.history)?,
            }),
            Transition::Advance(_) => Ok(Self::ask(&session.id, next)),
        }
    }

    fn ask(session_id: &SessionId, stage: &StageDefinition) -> DialogueReply {
        DialogueReply::Question {
            session_id: session_id.clone(),
            question: stage.prompt.unwrap_or_default().to_string(),
            options: stage.option_list(),
            is_free_text: stage.accepts_free_text,
        }
    }
}

impl Default for DialogueEngine {
    fn default() -> Self {
        Self::new()
    }
}
