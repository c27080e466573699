//! Intake Domain Module
//!
//! Guides a user through a fixed sequence of design questions and compiles
//! the answers into a generation prompt.
//!
//! # Architecture
//!
//! - **StageCatalog**: read-only stage graph shared by all sessions
//! - **Branching**: answer-dependent palette and template questions
//! - **IntakeSession**: per-session position, history and synthesized question
//! - **DialogueEngine**: advances a session by one answer
//! - **DesignBrief**: the compiled handoff prompt
//!
//! # Example
//!
//! ```ignore
//! let engine = DialogueEngine::new();
//! let (mut session, first_question) = engine.open(session_id)?;
//! let next = engine.advance(&mut session, Some("Portfolio"))?;
//! ```

pub mod branching;
pub mod brief;
pub mod catalog;
pub mod engine;
pub mod errors;
pub mod history;
pub mod session;
pub mod stage;

pub use branching::{SiteCategory, StyleClass};
pub use brief::DesignBrief;
pub use catalog::{StageCatalog, COMPLETION_ACKNOWLEDGEMENT, RESTART_MESSAGE};
pub use engine::{DialogueEngine, DialogueReply};
pub use errors::IntakeError;
pub use history::{History, HistoryEntry};
pub use session::IntakeSession;
pub use stage::{GeneratedStage, StageDefinition, StageId, Transition};
