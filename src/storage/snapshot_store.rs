//! The key-value contract the vocabulary manager persists through

use std::collections::HashMap;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,

    #[error("Storage backend error: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// External key-value store holding one serialized snapshot per key.
///
/// The manager never hands out a live reference to its list; it writes the
/// whole serialized sequence through [`set`](Self::set) after each mutation
/// and reads it back with [`get`](Self::get) on load.
pub trait SnapshotStore {
    /// The last-written value for `key`, or `None` if never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value for `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store, for tests and for embedding without a data directory.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    values: HashMap<String, String>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_before_any_set_is_none() {
        let store = MemorySnapshotStore::new();
        assert!(store.get("items").unwrap().is_none());
    }

    #[test]
    fn test_set_overwrites() {
        let mut store = MemorySnapshotStore::new();
        store.set("items", "[]").unwrap();
        store.set("items", "[1]").unwrap();
        assert_eq!(store.get("items").unwrap().as_deref(), Some("[1]"));
    }
}
