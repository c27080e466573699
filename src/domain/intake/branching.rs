//! Answer-dependent branches of the intake dialogue.
//!
//! Prior answers are classified into closed enumerations, each with an
//! explicit default class, so every answer maps to exactly one option set.

use super::errors::IntakeError;
use super::history::History;
use super::stage::{GeneratedStage, StageId};

/// Visual style family chosen at the `style` stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleClass {
    Modern,
    Playful,
    Elegant,
    /// Default for any style that names none of the other families.
    Bold,
}

impl StyleClass {
    /// Classifies a style answer by case-sensitive substring, first match wins
    /// in the order Modern, Playful, Elegant.
    pub fn classify(style: &str) -> Self {
        if style.contains("Modern") {
            StyleClass::Modern
        } else if style.contains("Playful") {
            StyleClass::Playful
        } else if style.contains("Elegant") {
            StyleClass::Elegant
        } else {
            StyleClass::Bold
        }
    }

    pub fn palette_prompt(&self) -> &'static str {
        match self {
            StyleClass::Modern => {
                "Based on the 'Modern & Minimalist' style, which color palette do you prefer?"
            }
            StyleClass::Playful => {
                "For a 'Playful & Creative' vibe, which of these palettes excites you?"
            }
            StyleClass::Elegant => {
                "For an 'Elegant & Sophisticated' look, which palette resonates most?"
            }
            StyleClass::Bold => "To feel 'Bold & Energetic', which color scheme should we use?",
        }
    }

    pub fn palettes(&self) -> &'static [&'static str] {
        match self {
            StyleClass::Modern => &[
                "Monochromatic Grays with a single accent color (e.g., blue)",
                "Black, White, and Gold",
                "Cool Blues and Off-Whites",
            ],
            StyleClass::Playful => &[
                "Bright Pastels (Coral, Mint, Lavender)",
                "Vibrant Primary Colors (Red, Yellow, Blue)",
                "Earthy Tones with a pop of Orange",
            ],
            StyleClass::Elegant => &[
                "Deep Jewel Tones (Emerald, Sapphire, Ruby)",
                "Cream, Beige, and Soft Gold",
                "Charcoal Gray, Silver, and a touch of Plum",
            ],
            StyleClass::Bold => &[
                "High-Contrast Black and Yellow",
                "Electric Blue and Hot Pink",
                "Deep Red, Orange, and Black",
            ],
        }
    }
}

/// Website category chosen at the `start` stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteCategory<'a> {
    ECommerce,
    /// Default for every category other than the exact `"E-commerce"`.
    Other(&'a str),
}

impl<'a> SiteCategory<'a> {
    pub const E_COMMERCE: &'static str = "E-commerce";

    /// Classifies a category answer by exact match.
    pub fn classify(category: &'a str) -> Self {
        if category == Self::E_COMMERCE {
            SiteCategory::ECommerce
        } else {
            SiteCategory::Other(category)
        }
    }

    pub fn template_prompt(&self) -> String {
        match self {
            SiteCategory::ECommerce => {
                "Here are a few layout concepts for your E-commerce site. Which one fits best?"
                    .to_string()
            }
            SiteCategory::Other(category) => format!(
                "Perfect. Now for the layout of your {} website. Which of these concepts do you prefer?",
                category
            ),
        }
    }

    pub fn templates(&self) -> &'static [&'static str] {
        match self {
            SiteCategory::ECommerce => &[
                "Template 1: A large hero image with a 'Shop Now' button, followed by a grid of best-selling products.",
                "Template 2: A minimalist design with a focus on high-quality product photography and lots of white space.",
                "Template 3: A dynamic layout with a sidebar for categories and filters, and a main area for product listings.",
                "Template 4: A content-driven approach with blog posts and lookbooks integrated with product links.",
            ],
            SiteCategory::Other(_) => &[
                "Template A: A full-screen background video on the homepage with centered text and a call-to-action button.",
                "Template B: A clean, grid-based layout to showcase projects or articles.",
                "Template C: A single-page scrolling site with distinct sections for About, Services, and Contact.",
                "Template D: An asymmetrical layout that feels artistic and unique.",
            ],
        }
    }
}

/// Synthesizes the `select_color` question from the style answer.
pub fn suggest_palettes(history: &History) -> Result<GeneratedStage, IntakeError> {
    let style = StyleClass::classify(history.require_answer(StageId::Style)?);
    Ok(GeneratedStage {
        stage: StageId::SelectColor,
        prompt: style.palette_prompt().to_string(),
        options: style.palettes().iter().map(|p| p.to_string()).collect(),
    })
}

/// Synthesizes the `select_template` question from the category answer.
pub fn suggest_templates(history: &History) -> Result<GeneratedStage, IntakeError> {
    let category = SiteCategory::classify(history.require_answer(StageId::Start)?);
    Ok(GeneratedStage {
        stage: StageId::SelectTemplate,
        prompt: category.template_prompt(),
        options: category.templates().iter().map(|t| t.to_string()).collect(),
    })
}
