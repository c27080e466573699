//! Per-session record of answered stages.

use serde::{Deserialize, Serialize};

use super::errors::IntakeError;
use super::stage::StageId;

/// One answered stage: the question as it was shown, and the reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub stage: StageId,
    pub question: String,
    pub answer: String,
}

/// Answered stages in traversal order, at most one entry per stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the question and answer for a stage.
    ///
    /// A stage that is already present keeps its position and has its
    /// entry replaced, so keys stay unique and ordered by first visit.
    pub fn record(
        &mut self,
        stage: StageId,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) {
        let entry = HistoryEntry {
            stage,
            question: question.into(),
            answer: answer.into(),
        };
        match self.entries.iter_mut().find(|e| e.stage == stage) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn get(&self, stage: StageId) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.stage == stage)
    }

    pub fn answer(&self, stage: StageId) -> Option<&str> {
        self.get(stage).map(|e| e.answer.as_str())
    }

    /// Returns the answer for a stage the caller depends on.
    pub fn require_answer(&self, stage: StageId) -> Result<&str, IntakeError> {
        self.answer(stage).ok_or(IntakeError::MissingAnswer(stage))
    }

    /// Stage keys in traversal order.
    pub fn stages(&self) -> Vec<StageId> {
        self.entries.iter().map(|e| e.stage).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
