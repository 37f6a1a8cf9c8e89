//! Vocabulary list state and its persistence cycle

use log::{debug, warn};
use uuid::Uuid;

use crate::storage::{Result, SnapshotStore};

use super::models::{Draft, VocabularyEntry};

/// Storage key for the serialized vocabulary list
const ITEMS_KEY: &str = "items";

/// Holds the ordered vocabulary list, applies add/edit/delete operations, and
/// writes the full serialized list back to the snapshot store after every
/// mutation.
///
/// The edit target toggles the two commit modes: unset means the next commit
/// appends a new entry, set means it replaces the entry with that id in
/// place. The manager also owns the draft input text, so callers do not need
/// any list state of their own.
pub struct VocabularyManager<S: SnapshotStore> {
    store: S,
    entries: Vec<VocabularyEntry>,
    edit_target: Option<Uuid>,
    draft: Draft,
}

impl<S: SnapshotStore> VocabularyManager<S> {
    /// Create a manager with an empty list; call [`load`](Self::load) to
    /// populate it from the store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            entries: Vec::new(),
            edit_target: None,
            draft: Draft::default(),
        }
    }

    /// Create a manager and immediately load the persisted snapshot.
    pub fn open(store: S) -> Result<Self> {
        let mut manager = Self::new(store);
        manager.load()?;
        Ok(manager)
    }

    /// Replace the in-memory list with the persisted snapshot.
    ///
    /// A missing snapshot yields the empty list. An unparseable snapshot is
    /// discarded with a warning and also yields the empty list; only a store
    /// read failure is an error.
    pub fn load(&mut self) -> Result<()> {
        self.entries = match self.store.get(ITEMS_KEY)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!("discarding unparseable vocabulary snapshot: {}", err);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        debug!("loaded {} vocabulary entries", self.entries.len());
        Ok(())
    }

    /// The current list, in insertion order
    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    /// The in-progress input text
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Replace the draft word (called on every input change)
    pub fn set_draft_word(&mut self, word: impl Into<String>) {
        self.draft.word = word.into();
    }

    /// Replace the draft translation (called on every input change)
    pub fn set_draft_translation(&mut self, translation: impl Into<String>) {
        self.draft.translation = translation.into();
    }

    /// Whether the next commit replaces an existing entry
    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    /// Switch to edit mode for `id`, copying that entry's text into the
    /// draft for the caller to present.
    ///
    /// Returns `false` (and changes nothing) when no entry has that id.
    pub fn begin_edit(&mut self, id: Uuid) -> bool {
        match self.entries.iter().find(|e| e.id == id) {
            Some(entry) => {
                self.draft.word = entry.word.clone();
                self.draft.translation = entry.translation.clone();
                self.edit_target = Some(id);
                true
            }
            None => false,
        }
    }

    /// Drop the draft and leave edit mode without touching the list
    pub fn cancel_edit(&mut self) {
        self.edit_target = None;
        self.draft.clear();
    }

    /// Append a new entry, or replace the edit target in place when one is
    /// set.
    ///
    /// Blank input (either side empty after trimming) commits nothing and
    /// returns `Ok(None)`: no mutation, no persistence call, edit mode
    /// untouched. Otherwise the whole updated list is persisted, the draft
    /// and edit target are cleared, and the committed entry is returned.
    pub fn commit(&mut self, word: &str, translation: &str) -> Result<Option<VocabularyEntry>> {
        if word.trim().is_empty() || translation.trim().is_empty() {
            debug!("commit rejected: blank word or translation");
            return Ok(None);
        }

        let committed = match self.edit_target.take() {
            Some(id) => match self.entries.iter_mut().find(|e| e.id == id) {
                Some(entry) => {
                    // Same id, same position, new text.
                    entry.word = word.to_string();
                    entry.translation = translation.to_string();
                    entry.clone()
                }
                // delete() clears a matching edit target, so the id always
                // resolves; if it somehow does not, keep the typed text.
                None => self.append(word, translation),
            },
            None => self.append(word, translation),
        };

        self.persist()?;
        self.draft.clear();
        Ok(Some(committed))
    }

    /// Commit the current draft text. Convenience for callers that let the
    /// manager own the input state.
    pub fn commit_draft(&mut self) -> Result<Option<VocabularyEntry>> {
        let word = self.draft.word.clone();
        let translation = self.draft.translation.clone();
        self.commit(&word, &translation)
    }

    /// Remove the entry with `id` and persist the shortened list.
    ///
    /// Returns `Ok(false)` without writing when no entry matches. Deleting
    /// the current edit target also leaves edit mode and drops the draft.
    pub fn delete(&mut self, id: Uuid) -> Result<bool> {
        let len_before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == len_before {
            return Ok(false);
        }

        if self.edit_target == Some(id) {
            self.cancel_edit();
        }

        self.persist()?;
        Ok(true)
    }

    fn append(&mut self, word: &str, translation: &str) -> VocabularyEntry {
        let entry = VocabularyEntry::new(word.to_string(), translation.to_string());
        self.entries.push(entry.clone());
        entry
    }

    /// Serialize the whole list and overwrite the stored snapshot
    fn persist(&mut self) -> Result<()> {
        let snapshot = serde_json::to_string_pretty(&self.entries)?;
        self.store.set(ITEMS_KEY, &snapshot)?;
        debug!("persisted {} vocabulary entries", self.entries.len());
        Ok(())
    }
}
