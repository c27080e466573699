//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, errors, state machine trait)
//! - `intake` - Stage catalog, branching rules, sessions and the dialogue engine

pub mod foundation;
pub mod intake;
