//! The note entity: an immutable id plus a mutable text payload.
//!
//! Two notes are the same logical entity iff their ids are equal; equality
//! and hashing follow the id only. [`Note::duplicate`] produces a
//! value-equal copy sharing the id, which the stores hand out on reads so
//! callers can never mutate cached state in place.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// A short piece of text to remind someone of something, like a sticky note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    id: String,
    content: String,
}

impl Note {
    /// Create a note with a freshly generated id and the given content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
        }
    }

    /// Reconstruct a note whose identity already exists in storage.
    ///
    /// Only for loading persisted data (the id comes from a filename stem or
    /// a decoded blob). New identity always goes through [`Note::new`].
    pub fn adopt(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Copy the mutable fields of `other` into this note. The id is left
    /// untouched.
    pub fn copy_from(&mut self, other: &Note) {
        self.content = other.content.clone();
    }

    /// An exact copy sharing this note's id.
    pub fn duplicate(&self) -> Note {
        self.clone()
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Note {}

impl Hash for Note {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let a = Note::new("a");
        let b = Note::new("a");
        assert_ne!(a.id(), b.id());
        assert!(!a.id().is_empty());
    }

    #[test]
    fn test_new_defaults_to_given_content() {
        let note = Note::new("hello");
        assert_eq!(note.content(), "hello");
    }

    #[test]
    fn test_duplicate_shares_id_and_content() {
        let note = Note::new("payload");
        let copy = note.duplicate();
        assert_eq!(copy.id(), note.id());
        assert_eq!(copy.content(), note.content());
        assert_eq!(copy, note);
    }

    #[test]
    fn test_copy_from_leaves_id_untouched() {
        let mut target = Note::new("old");
        let source = Note::new("new");
        let target_id = target.id().to_string();
        target.copy_from(&source);
        assert_eq!(target.id(), target_id);
        assert_eq!(target.content(), "new");
    }

    #[test]
    fn test_equality_follows_id_only() {
        let mut a = Note::new("same");
        let b = a.duplicate();
        a.set_content("changed");
        assert_eq!(a, b);
        assert_ne!(a, Note::new("same"));
    }

    #[test]
    fn test_adopt_keeps_given_id() {
        let note = Note::adopt("abc-123", "body");
        assert_eq!(note.id(), "abc-123");
        assert_eq!(note.content(), "body");
    }
}
