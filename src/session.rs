//! Session persistence over the storage capability.
//!
//! ARCHITECTURE
//! ============
//! The session is the durable record of the current login: one opaque bearer
//! token plus the user record it authenticates, written together and cleared
//! together. Expiry is never checked locally — the first 401 from the remote
//! API is what invalidates a session, via [`SessionStore::evict`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::net::types::User;
use crate::storage::Storage;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "auth.token";
/// Storage key for the JSON-serialized user record.
pub const USER_KEY: &str = "auth.user";
/// Storage key for the selected school (string-encoded integer).
pub const SCHOOL_KEY: &str = "current_school_id";

/// The durable record of a login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token issued by the login/register endpoints.
    pub token: String,
    /// Cached user record for display without a network round trip.
    pub user: User,
}

/// Typed accessor over the raw storage keys.
///
/// Cheap to clone; every clone shares the same backend.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn Storage>,
}

impl SessionStore {
    /// Wrap a storage backend.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Whether the backend persists anything (false in headless contexts).
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.storage.is_available()
    }

    /// The stored bearer token, if a session exists.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.storage.get_item(TOKEN_KEY)
    }

    /// The cached user record.
    ///
    /// A malformed entry is repaired by clearing the whole session — callers
    /// see "signed out", never an error.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        let raw = self.storage.get_item(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(error) => {
                tracing::warn!(%error, "stored user record is corrupt; clearing session");
                self.clear();
                None
            }
        }
    }

    /// The full session, present only when both halves are readable.
    #[must_use]
    pub fn session(&self) -> Option<Session> {
        let token = self.token()?;
        let user = self.user()?;
        Some(Session { token, user })
    }

    /// Persist a session. Token and user are written as a unit.
    pub fn set(&self, session: &Session) {
        match serde_json::to_string(&session.user) {
            Ok(raw) => {
                self.storage.set_item(TOKEN_KEY, &session.token);
                self.storage.set_item(USER_KEY, &raw);
            }
            Err(error) => {
                tracing::error!(%error, "failed to encode user record; session not persisted");
            }
        }
    }

    /// Remove both session entries. Clearing an absent session is a no-op.
    pub fn clear(&self) {
        self.storage.remove_item(TOKEN_KEY);
        self.storage.remove_item(USER_KEY);
    }

    /// Evict the session after an authorization failure.
    ///
    /// Returns `true` only for the caller that actually removed the token, so
    /// concurrent 401s dedupe to a single redirect.
    pub fn evict(&self) -> bool {
        let had_token = self.storage.take_item(TOKEN_KEY).is_some();
        self.storage.remove_item(USER_KEY);
        had_token
    }

    /// The selected school, when one has been chosen.
    ///
    /// A non-numeric entry reads as absent (and is removed).
    #[must_use]
    pub fn current_school_id(&self) -> Option<i64> {
        let raw = self.storage.get_item(SCHOOL_KEY)?;
        match raw.parse() {
            Ok(id) => Some(id),
            Err(_) => {
                tracing::warn!(raw, "stored school id is not an integer; clearing it");
                self.storage.remove_item(SCHOOL_KEY);
                None
            }
        }
    }

    /// Record the selected school.
    pub fn set_current_school_id(&self, id: i64) {
        self.storage.set_item(SCHOOL_KEY, &id.to_string());
    }

    /// Forget the selected school.
    pub fn clear_current_school_id(&self) {
        self.storage.remove_item(SCHOOL_KEY);
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("available", &self.is_available())
            .field("authenticated", &self.token().is_some())
            .finish()
    }
}
