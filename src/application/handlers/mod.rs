//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

mod process_message;

pub use process_message::{ProcessMessageCommand, ProcessMessageError, ProcessMessageHandler};
