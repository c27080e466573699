//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, validation errors and the state machine trait
//! used across the intake domain.

mod errors;
mod ids;
mod state_machine;

pub use errors::ValidationError;
pub use ids::SessionId;
pub use state_machine::StateMachine;
