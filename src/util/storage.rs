//! Key-value persistence behind a capability trait.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components depend on [`KeyValueStore`] rather than touching
//! `localStorage` globals directly, so the same code paths run against
//! the browser store in hydrate builds and an in-memory store in
//! native tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Minimal string key-value persistence capability.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str);
}

/// Browser `localStorage`-backed store. Reads and writes are no-ops
/// outside a browser environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// In-memory store for tests and non-browser builds. Clones share the
/// same underlying map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    cells: Arc<Mutex<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.cells.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut cells) = self.cells.lock() {
            cells.insert(key.to_owned(), value.to_owned());
        }
    }
}
