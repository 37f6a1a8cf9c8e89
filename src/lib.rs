//! Backend for a vocabulary flashcard list: word/translation pairs kept in
//! insertion order, mutated through add/edit/delete, and written back to a
//! key-value snapshot store as one JSON blob after every change.
//!
//! The presentation layer is an external caller: it pushes text-field changes
//! into the manager's draft, triggers commits and deletes, and renders
//! [`VocabularyManager::entries`]. Persistence goes through the
//! [`SnapshotStore`] contract; [`FileSnapshotStore`] is the on-disk
//! implementation and [`MemorySnapshotStore`] the in-memory one.

pub mod storage;
pub mod vocabulary;

pub use storage::{FileSnapshotStore, MemorySnapshotStore, SnapshotStore, StorageError};
pub use vocabulary::{Draft, VocabularyEntry, VocabularyManager};
