//! Application layer - Handlers that coordinate the dialogue engine with storage.
//!
//! The domain engine advances one session in memory. This layer loads and
//! persists sessions, serializes concurrent messages for the same session,
//! and turns corrupted sessions into a restart reply.

pub mod handlers;
mod session_locks;

pub use handlers::{ProcessMessageCommand, ProcessMessageError, ProcessMessageHandler};
pub use session_locks::{SessionGuard, SessionLocks};
