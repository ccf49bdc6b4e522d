use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use navigator_core::model::{MilestoneFacts, SessionId};
use navigator_core::time::Clock;

use super::service::JourneyService;
use crate::error::JourneyError;

/// Session-keyed store of journey contexts.
///
/// The journey model itself is single-threaded per session; this registry is
/// the mutual-exclusion discipline for hosts that share one session across
/// concurrent requests (two browser tabs). Each session sits behind its own
/// lock, so read-modify-write pairs against one session serialize while
/// distinct sessions do not contend.
#[derive(Clone, Default)]
pub struct JourneyRegistry {
    clock: Clock,
    sessions: Arc<RwLock<HashMap<SessionId, Arc<Mutex<JourneyService>>>>>,
}

impl JourneyRegistry {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Start a session with the given initial milestone facts.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::LockPoisoned` if the registry lock is poisoned.
    pub fn create_session(&self, facts: MilestoneFacts) -> Result<SessionId, JourneyError> {
        let id = SessionId::new();
        let service = JourneyService::new(facts).with_clock(self.clock);
        let mut guard = self
            .sessions
            .write()
            .map_err(|_| JourneyError::LockPoisoned)?;
        guard.insert(id, Arc::new(Mutex::new(service)));
        Ok(id)
    }

    /// Run `f` against a session, holding its lock for the duration.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::SessionNotFound` for unknown ids, or
    /// `JourneyError::LockPoisoned` if a lock is poisoned.
    pub fn with_session<T>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut JourneyService) -> T,
    ) -> Result<T, JourneyError> {
        let entry = {
            let guard = self
                .sessions
                .read()
                .map_err(|_| JourneyError::LockPoisoned)?;
            guard
                .get(&id)
                .cloned()
                .ok_or(JourneyError::SessionNotFound(id))?
        };
        let mut service = entry.lock().map_err(|_| JourneyError::LockPoisoned)?;
        Ok(f(&mut service))
    }

    /// End a session, discarding its ledger.
    ///
    /// # Errors
    ///
    /// Returns `JourneyError::SessionNotFound` for unknown ids, or
    /// `JourneyError::LockPoisoned` if the registry lock is poisoned.
    pub fn end_session(&self, id: SessionId) -> Result<(), JourneyError> {
        let mut guard = self
            .sessions
            .write()
            .map_err(|_| JourneyError::LockPoisoned)?;
        guard
            .remove(&id)
            .map(|_| ())
            .ok_or(JourneyError::SessionNotFound(id))
    }

    /// True if a session with this id is active.
    #[must_use]
    pub fn contains(&self, id: SessionId) -> bool {
        self.sessions
            .read()
            .map(|guard| guard.contains_key(&id))
            .unwrap_or(false)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
