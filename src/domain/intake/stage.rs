//! Stage identifiers and stage definitions.
//!
//! A [`StageDefinition`] is immutable template data shared by every session.
//! Content computed at runtime for a particular session is carried by a
//! [`GeneratedStage`] stored on that session, never written back here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::StateMachine;

use super::errors::IntakeError;
use super::history::History;

/// Stable key of a dialogue stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageId {
    Start,
    Style,
    Audience,
    ColorSuggestion,
    SelectColor,
    TemplateSuggestion,
    SelectTemplate,
    End,
}

impl StageId {
    /// All stages in traversal order.
    pub const ALL: [StageId; 8] = [
        StageId::Start,
        StageId::Style,
        StageId::Audience,
        StageId::ColorSuggestion,
        StageId::SelectColor,
        StageId::TemplateSuggestion,
        StageId::SelectTemplate,
        StageId::End,
    ];

    /// Returns the persisted key for this stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            StageId::Start => "start",
            StageId::Style => "style",
            StageId::Audience => "audience",
            StageId::ColorSuggestion => "color_suggestion",
            StageId::SelectColor => "select_color",
            StageId::TemplateSuggestion => "template_suggestion",
            StageId::SelectTemplate => "select_template",
            StageId::End => "end",
        }
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StageId {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StageId::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| IntakeError::UnknownStage(s.to_string()))
    }
}

impl StateMachine for StageId {
    fn can_transition_to(&self, target: &Self) -> bool {
        use StageId::*;
        matches!(
            (self, target),
            (Start, Style)
                | (Style, Audience)
                | (Audience, ColorSuggestion)
                | (ColorSuggestion, SelectColor)
                | (SelectColor, TemplateSuggestion)
                | (TemplateSuggestion, SelectTemplate)
                | (SelectTemplate, End)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use StageId::*;
        match self {
            Start => vec![Style],
            Style => vec![Audience],
            Audience => vec![ColorSuggestion],
            ColorSuggestion => vec![SelectColor],
            SelectColor => vec![TemplateSuggestion],
            TemplateSuggestion => vec![SelectTemplate],
            SelectTemplate => vec![End],
            End => vec![],
        }
    }
}

/// A question synthesized from a session's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedStage {
    /// Stage that awaits the answer to this question.
    pub stage: StageId,
    pub prompt: String,
    pub options: Vec<String>,
}

/// Computes the next question from everything answered so far.
pub type StageGenerator = fn(&History) -> Result<GeneratedStage, IntakeError>;

/// Compiles the history of a finished session into its output text.
pub type Finalizer = fn(&History) -> Result<String, IntakeError>;

/// How a stage hands control to the next one.
#[derive(Clone, Copy)]
pub enum Transition {
    /// The stage awaits an answer, then moves to a fixed successor.
    Advance(StageId),
    /// Entering the stage synthesizes the question for another stage.
    Generate(StageGenerator),
    /// Entering the stage ends the session.
    Finish(Finalizer),
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Advance(next) => f.debug_tuple("Advance").field(next).finish(),
            Transition::Generate(_) => f.write_str("Generate(..)"),
            Transition::Finish(_) => f.write_str("Finish(..)"),
        }
    }
}

/// Read-only definition of one stage of the conversation.
#[derive(Debug, Clone)]
pub struct StageDefinition {
    pub id: StageId,
    /// Fixed question text. `None` for stages whose question is synthesized.
    pub prompt: Option<&'static str>,
    pub options: &'static [&'static str],
    pub accepts_free_text: bool,
    pub transition: Transition,
}

impl StageDefinition {
    /// True only for the stage that ends the conversation.
    pub fn is_terminal(&self) -> bool {
        matches!(self.transition, Transition::Finish(_))
    }

    /// True if entering this stage synthesizes the next question.
    pub fn is_generated(&self) -> bool {
        matches!(self.transition, Transition::Generate(_))
    }

    /// Resolves the successor for an answer given while this stage is active.
    ///
    /// Routing does not depend on the answer content for any stage today;
    /// every answer, including the empty one, leads to the same successor.
    /// Returns `None` for stages that never await an answer.
    pub fn successor(&self, _answer: &str) -> Option<StageId> {
        match self.transition {
            Transition::Advance(next) => Some(next),
            Transition::Generate(_) | Transition::Finish(_) => None,
        }
    }

    /// Options as owned strings, empty for free-text stages.
    pub fn option_list(&self) -> Vec<String> {
        if self.accepts_free_text {
            return Vec::new();
        }
        self.options.iter().map(|o| o.to_string()).collect()
    }
}
