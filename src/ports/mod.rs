//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionStore` - Keyed storage of in-progress intake sessions

mod session_store;

pub use session_store::{SessionStore, SessionStoreError};
