//! Adapters - Implementations of ports and the HTTP surface.
//!
//! - `storage` - SessionStore implementations
//! - `http` - axum routes exposing the dialogue

pub mod http;
pub mod storage;
