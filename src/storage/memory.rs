//! In-process storage backend.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use super::Storage;

/// Mutex-guarded map. Durable for the lifetime of the process only; the
/// default backend for tests and ephemeral shells.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.entries().insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        self.entries().remove(key);
    }

    fn take_item(&self, key: &str) -> Option<String> {
        // Single lock acquisition so two racing evictions cannot both win.
        self.entries().remove(key)
    }
}
