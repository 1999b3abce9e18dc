//! File-backed storage backend.
//!
//! TRADE-OFFS
//! ==========
//! The whole store is one JSON object rewritten on every mutation. Entries
//! are a handful of short strings (token, cached user, selected school), so
//! write amplification is irrelevant and the format stays inspectable.
//! Unreadable or malformed files degrade to an empty store instead of
//! failing the shell at startup.

#[cfg(test)]
#[path = "file_test.rs"]
mod file_test;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::Storage;

/// Durable store persisted as a JSON object at a fixed path.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStorage {
    /// Open the store at `path`, loading whatever is already there.
    ///
    /// A missing file starts empty; a corrupt file is logged and discarded on
    /// the next write.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::load(&path);
        Self { path, entries: Mutex::new(entries) }
    }

    fn load(path: &Path) -> HashMap<String, String> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return HashMap::new(),
            Err(error) => {
                tracing::warn!(%error, path = %path.display(), "failed to read storage file; starting empty");
                return HashMap::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(error) => {
                tracing::warn!(%error, path = %path.display(), "storage file is not valid JSON; starting empty");
                HashMap::new()
            }
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, entries: &HashMap<String, String>) {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(error) = std::fs::create_dir_all(parent) {
                    tracing::warn!(%error, path = %self.path.display(), "failed to create storage directory");
                    return;
                }
            }
        }
        let raw = match serde_json::to_string_pretty(entries) {
            Ok(raw) => raw,
            Err(error) => {
                tracing::warn!(%error, "failed to encode storage entries");
                return;
            }
        };
        if let Err(error) = std::fs::write(&self.path, raw) {
            tracing::warn!(%error, path = %self.path.display(), "failed to write storage file");
        }
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        let mut entries = self.entries();
        entries.insert(key.to_owned(), value.to_owned());
        self.persist(&entries);
    }

    fn remove_item(&self, key: &str) {
        let mut entries = self.entries();
        if entries.remove(key).is_some() {
            self.persist(&entries);
        }
    }

    fn take_item(&self, key: &str) -> Option<String> {
        let mut entries = self.entries();
        let value = entries.remove(key);
        if value.is_some() {
            self.persist(&entries);
        }
        value
    }
}
