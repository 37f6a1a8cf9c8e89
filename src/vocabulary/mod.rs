//! Vocabulary flashcard list management
//!
//! This module provides:
//! - The entry data model (word/translation pairs with opaque unique ids)
//! - The list manager: add/edit/delete with the full list re-persisted
//!   after every mutation, plus the draft input state and add/edit toggle

pub mod manager;
pub mod models;

pub use manager::VocabularyManager;
pub use models::{Draft, VocabularyEntry};
