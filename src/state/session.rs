//! Persisted credential for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend issues an opaque JWT on successful auth. This crate
//! only ever writes it: the token is stored under a fixed key,
//! overwritten on every login, and never cleared (there is no logout
//! path). Authenticated reads happen in callers outside this crate.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use crate::util::storage::{BrowserStore, KeyValueStore};

/// Storage key the issued JWT is persisted under.
pub const TOKEN_KEY: &str = "token";

/// Handle to the process-wide credential store.
///
/// Cheap to clone; clones share the same underlying store. Provided
/// via context from the app root so components depend on the
/// [`KeyValueStore`] capability rather than a browser global.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn KeyValueStore>,
}

impl Session {
    /// Build a session over any key-value store.
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }

    /// Session backed by browser `localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(BrowserStore)
    }

    /// The stored JWT, if a login has completed in this browser.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    /// Persist `jwt`, replacing any previously stored credential.
    pub fn store_token(&self, jwt: &str) {
        self.store.set(TOKEN_KEY, jwt);
    }
}
