use std::fs;
use std::path::PathBuf;

use super::snapshot_store::{Result, SnapshotStore, StorageError};

/// File-backed snapshot store: one `<key>.json` file per key under a base
/// directory.
pub struct FileSnapshotStore {
    base_path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("sozluk"))
            .ok_or(StorageError::DataDirNotFound)
    }

    /// Create the base directory if it does not exist yet
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        Ok(())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.init()?;
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (FileSnapshotStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSnapshotStore::new(temp_dir.path().to_path_buf());
        (store, temp_dir)
    }

    #[test]
    fn test_get_missing_key_is_none() {
        let (store, _temp) = create_test_store();
        assert!(store.get("items").unwrap().is_none());
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let (mut store, _temp) = create_test_store();
        store.set("items", "[{\"id\":\"1\"}]").unwrap();
        assert_eq!(store.get("items").unwrap().as_deref(), Some("[{\"id\":\"1\"}]"));
    }

    #[test]
    fn test_value_survives_a_new_store_instance() {
        let (mut store, temp) = create_test_store();
        store.set("items", "[]").unwrap();
        drop(store);

        let reopened = FileSnapshotStore::new(temp.path().to_path_buf());
        assert_eq!(reopened.get("items").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_keys_map_to_json_files() {
        let (mut store, temp) = create_test_store();
        store.set("items", "[]").unwrap();
        assert!(temp.path().join("items.json").exists());
    }
}
