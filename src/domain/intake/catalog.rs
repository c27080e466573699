//! The design-intake stage catalog.
//!
//! Built once and shared read-only by every session.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::branching::{suggest_palettes, suggest_templates};
use super::brief::compile_brief;
use super::errors::IntakeError;
use super::stage::{StageDefinition, StageId, Transition};

/// Shown alongside the compiled brief when a session completes.
pub const COMPLETION_ACKNOWLEDGEMENT: &str = "Thank you! I have all the information I need. I'm now generating your website design. Here is the final prompt we constructed:";

/// Shown instead of a question when a session had to be discarded.
pub const RESTART_MESSAGE: &str = "An error occurred, please start over.";

static DESIGN_INTAKE: Lazy<StageCatalog> = Lazy::new(StageCatalog::design_intake);

/// Lookup table of stage definitions.
#[derive(Debug, Clone)]
pub struct StageCatalog {
    stages: HashMap<StageId, StageDefinition>,
}

impl StageCatalog {
    /// Shared instance of the design-intake catalog.
    pub fn standard() -> &'static StageCatalog {
        &DESIGN_INTAKE
    }

    /// Builds the design-intake conversation graph.
    pub fn design_intake() -> Self {
        let stages = [
            StageDefinition {
                id: StageId::Start,
                prompt: Some("Hello! I'm here to help you design the perfect website. What kind of website are you looking to build today?"),
                options: &["E-commerce", "Educational", "Luxury Product", "Portfolio"],
                accepts_free_text: false,
                transition: Transition::Advance(StageId::Style),
            },
            StageDefinition {
                id: StageId::Style,
                prompt: Some("Great choice! What feeling or style should the website convey?"),
                options: &[
                    "Modern & Minimalist",
                    "Playful & Creative",
                    "Elegant & Sophisticated",
                    "Bold & Energetic",
                ],
                accepts_free_text: false,
                transition: Transition::Advance(StageId::Audience),
            },
            StageDefinition {
                id: StageId::Audience,
                prompt: Some("Understood. Who is the target audience for this website? (e.g., 'Young professionals', 'Students', 'High-end consumers')"),
                options: &[],
                accepts_free_text: true,
                transition: Transition::Advance(StageId::ColorSuggestion),
            },
            StageDefinition {
                id: StageId::ColorSuggestion,
                prompt: None,
                options: &[],
                accepts_free_text: false,
                transition: Transition::Generate(suggest_palettes),
            },
            StageDefinition {
                id: StageId::SelectColor,
                prompt: None,
                options: &[],
                accepts_free_text: false,
                transition: Transition::Advance(StageId::TemplateSuggestion),
            },
            StageDefinition {
                id: StageId::TemplateSuggestion,
                prompt: None,
                options: &[],
                accepts_free_text: false,
                transition: Transition::Generate(suggest_templates),
            },
            StageDefinition {
                id: StageId::SelectTemplate,
                prompt: None,
                options: &[],
                accepts_free_text: false,
                transition: Transition::Advance(StageId::End),
            },
            StageDefinition {
                id: StageId::End,
                prompt: None,
                options: &[],
                accepts_free_text: false,
                transition: Transition::Finish(compile_brief),
            },
        ];

        Self {
            stages: stages.into_iter().map(|s| (s.id, s)).collect(),
        }
    }

    pub fn get(&self, id: StageId) -> Option<&StageDefinition> {
        self.stages.get(&id)
    }

    /// Resolves a stored stage key to its definition.
    ///
    /// # Errors
    /// Returns `IntakeError::UnknownStage` if the key names no stage in this catalog.
    pub fn resolve(&self, key: &str) -> Result<&StageDefinition, IntakeError> {
        let id: StageId = key.parse()?;
        self.get(id)
            .ok_or_else(|| IntakeError::UnknownStage(key.to_string()))
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Default for StageCatalog {
    fn default() -> Self {
        Self::design_intake()
    }
}
