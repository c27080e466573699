//! Final design brief compiled from a finished session.
//!
//! The brief is the handoff artifact for the code-generation step. Rendering
//! is pure templating over the five captured facts.

use super::errors::IntakeError;
use super::history::History;
use super::stage::StageId;

/// The five facts captured by a complete intake session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignBrief {
    pub category: String,
    pub audience: String,
    pub style: String,
    pub palette: String,
    pub template: String,
}

impl DesignBrief {
    /// Collects the captured facts from history.
    ///
    /// # Errors
    /// Returns `IntakeError::MissingAnswer` naming the first stage without an answer.
    pub fn from_history(history: &History) -> Result<Self, IntakeError> {
        Ok(Self {
            category: history.require_answer(StageId::Start)?.to_string(),
            audience: history.require_answer(StageId::Audience)?.to_string(),
            style: history.require_answer(StageId::Style)?.to_string(),
            palette: history.require_answer(StageId::SelectColor)?.to_string(),
            template: history.require_answer(StageId::SelectTemplate)?.to_string(),
        })
    }

    /// Renders the generation prompt.
    pub fn render(&self) -> String {
        format!(
            "Generate a complete, single-file HTML website with inline CSS and JavaScript. The website must be responsive.\n\
             ---\n\
             **Core Requirements:**\n\
             - **Website Category:** {category}\n\
             - **Target Audience:** {audience}\n\
             - **Desired Style/Vibe:** {style}\n\
             \n\
             **Design Specifications:**\n\
             - **Color Palette:** {palette}\n\
             - **Layout Template:** Based on the user's choice: \"{template}\"\n\
             \n\
             **Instructions:**\n\
             - Interpret the chosen layout template creatively and build a full webpage.\n\
             - Ensure the color palette is applied tastefully throughout the design.\n\
             - The final code should be production-ready, well-formatted, and contained within a single HTML file.\n",
            category = self.category,
            audience = self.audience,
            style = self.style,
            palette = self.palette,
            template = self.template,
        )
    }
}

/// Finalizer of the terminal stage.
pub fn compile_brief(history: &History) -> Result<String, IntakeError> {
    Ok(DesignBrief::from_history(history)?.render())
}
