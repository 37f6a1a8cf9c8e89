//! Data models for the vocabulary list

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One word/translation pair in the vocabulary list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    /// Unique identifier, assigned at creation and never reassigned
    pub id: Uuid,
    /// The word being learned, in the source language
    pub word: String,
    /// Its meaning in the target language
    pub translation: String,
}

impl VocabularyEntry {
    pub fn new(word: String, translation: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            word,
            translation,
        }
    }
}

/// The not-yet-committed word/translation text backing the input fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub word: String,
    pub translation: String,
}

impl Draft {
    /// Whether either side is empty after trimming surrounding whitespace
    pub fn is_blank(&self) -> bool {
        self.word.trim().is_empty() || self.translation.trim().is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.word.clear();
        self.translation.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serializes_to_the_snapshot_field_shape() {
        let entry = VocabularyEntry::new("run".to_string(), "qaçmaq".to_string());
        let value = serde_json::to_value(&entry).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.len(), 3);
        assert!(obj["id"].is_string());
        assert_eq!(obj["word"], "run");
        assert_eq!(obj["translation"], "qaçmaq");
    }

    #[test]
    fn test_blank_detection_trims_whitespace() {
        let draft = Draft {
            word: "  \t".to_string(),
            translation: "qaçmaq".to_string(),
        };
        assert!(draft.is_blank());

        let draft = Draft {
            word: "run".to_string(),
            translation: "qaçmaq".to_string(),
        };
        assert!(!draft.is_blank());
    }
}
