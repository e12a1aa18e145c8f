//! Session token persistence.
//!
//! The session returned by a successful sign-in is stored as JSON under a
//! single fixed key. A save fully replaces whatever was there; `load`
//! reverses exactly what `save` wrote.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::util::storage::KeyValueBacking;

/// Fixed storage key the session lives under.
pub const SESSION_STORAGE_KEY: &str = "TOKEN";

/// An authenticated session as returned by the login operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Seconds the token stays valid, per the server contract.
    pub life_time: u64,
    /// Opaque bearer token.
    pub token: String,
}

/// Store for the single persisted session slot.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<B: KeyValueBacking> {
    backing: B,
}

impl<B: KeyValueBacking> SessionStore<B> {
    pub fn new(backing: B) -> Self {
        Self { backing }
    }

    /// Persist `session`, replacing any prior one.
    pub fn save(&self, session: &Session) {
        if let Ok(raw) = serde_json::to_string(session) {
            self.backing.set_item(SESSION_STORAGE_KEY, &raw);
        }
    }

    /// The stored session, if one is present and decodes.
    pub fn load(&self) -> Option<Session> {
        let raw = self.backing.get_item(SESSION_STORAGE_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    /// Drop the stored session (sign-out).
    pub fn clear(&self) {
        self.backing.remove_item(SESSION_STORAGE_KEY);
    }
}
