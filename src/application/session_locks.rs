//! Per-session serialization of message processing.
//!
//! Calls for different sessions proceed in parallel; calls for the same
//! session queue behind one async mutex. Each caller counts as a user of the
//! session's slot from the moment it starts waiting, and the slot is dropped
//! when the last user leaves, including callers cancelled while waiting.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

use crate::domain::foundation::SessionId;

#[derive(Debug, Default)]
struct Slot {
    lock: Arc<AsyncMutex<()>>,
    users: usize,
}

/// Registry of per-session locks.
#[derive(Debug, Default)]
pub struct SessionLocks {
    slots: Mutex<HashMap<SessionId, Slot>>,
}

impl SessionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until no other caller holds the session, then holds it until the
    /// returned guard is dropped.
    pub async fn acquire(&self, session_id: &SessionId) -> SessionGuard<'_> {
        let (registration, lock) = self.register(session_id);
        let guard = lock.lock_owned().await;
        SessionGuard {
            _guard: guard,
            _registration: registration,
        }
    }

    /// Number of sessions currently held or awaited.
    pub fn len(&self) -> usize {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn register(&self, session_id: &SessionId) -> (Registration<'_>, Arc<AsyncMutex<()>>) {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        let slot = slots.entry(session_id.clone()).or_default();
        slot.users += 1;
        let registration = Registration {
            registry: self,
            session_id: session_id.clone(),
        };
        (registration, slot.lock.clone())
    }

    fn unregister(&self, session_id: &SessionId) {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(slot) = slots.get_mut(session_id) {
            slot.users = slot.users.saturating_sub(1);
            if slot.users == 0 {
                slots.remove(session_id);
            }
        }
    }
}

/// One caller's claim on a slot, released on drop whether or not the lock
/// was ever obtained.
#[derive(Debug)]
struct Registration<'a> {
    registry: &'a SessionLocks,
    session_id: SessionId,
}

impl Drop for Registration<'_> {
    fn drop(&mut self) {
        self.registry.unregister(&self.session_id);
    }
}

/// Exclusive hold on one session.
///
/// Fields drop in declaration order: the mutex is unlocked before the slot
/// can be removed.
#[derive(Debug)]
pub struct SessionGuard<'a> {
    _guard: OwnedMutexGuard<()>,
    _registration: Registration<'a>,
}
