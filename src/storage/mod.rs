mod file_storage;
mod snapshot_store;

pub use file_storage::FileSnapshotStore;
pub use snapshot_store::{MemorySnapshotStore, Result, SnapshotStore, StorageError};
