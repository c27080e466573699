//! Session Store Port - Interface for keeping intake sessions.
//!
//! The store is a passive keyed container. It holds no business logic and
//! applies no expiry: sessions leave only when the caller deletes them.

use async_trait::async_trait;

use crate::domain::foundation::SessionId;
use crate::domain::intake::IntakeSession;

/// Errors that can occur during session store operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session store unavailable: {0}")]
    Unavailable(String),
}

/// Port for keeping intake sessions keyed by session id
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load a session
    ///
    /// # Returns
    /// `None` if no session exists for the id
    async fn load(&self, session_id: &SessionId) -> Result<Option<IntakeSession>, SessionStoreError>;

    /// Insert or replace a session under its own id
    async fn save(&self, session: &IntakeSession) -> Result<(), SessionStoreError>;

    /// Remove a session. Removing an absent session is not an error.
    async fn delete(&self, session_id: &SessionId) -> Result<(), SessionStoreError>;

    /// Check if a session exists
    async fn exists(&self, session_id: &SessionId) -> Result<bool, SessionStoreError>;

    /// Number of sessions currently held
    async fn count(&self) -> Result<usize, SessionStoreError>;
}
