//! In-memory strategy: a plain map, no durability.

use super::NoteStore;
use crate::error::{Result, StoreError};
use crate::model::Note;
use std::collections::HashMap;

/// [`NoteStore`] backed by a process-local map. Everything is lost when the
/// store is dropped; the shell says so loudly when it falls back to this.
#[derive(Debug, Default)]
pub struct MemoryStore {
    notes: HashMap<String, Note>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, note: Note) -> String {
        let id = note.id().to_string();
        self.notes.insert(id.clone(), note);
        id
    }
}

impl NoteStore for MemoryStore {
    fn create_with_content(&mut self, content: &str) -> Result<String> {
        Ok(self.insert(Note::new(content)))
    }

    fn create_from(&mut self, note: &Note) -> Result<String> {
        Ok(self.insert(Note::new(note.content())))
    }

    fn get(&self, id: &str) -> Result<Note> {
        if id.is_empty() {
            return Err(StoreError::blank_id());
        }
        self.notes
            .get(id)
            .map(Note::duplicate)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn get_all(&self) -> Result<Vec<Note>> {
        Ok(self.notes.values().map(Note::duplicate).collect())
    }

    fn count(&self) -> usize {
        self.notes.len()
    }

    fn update(&mut self, note: &Note) -> Result<Note> {
        if note.id().is_empty() {
            return Err(StoreError::blank_id());
        }
        let current = self
            .notes
            .get_mut(note.id())
            .ok_or_else(|| StoreError::NotFound(note.id().to_string()))?;
        current.copy_from(note);
        Ok(current.duplicate())
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        if id.is_empty() {
            return Err(StoreError::blank_id());
        }
        // Removing an unknown id is an idempotent no-op success.
        self.notes.remove(id);
        Ok(true)
    }

    fn delete_all(&mut self) {
        // Fresh map rather than clear-in-place; nothing external may hold a
        // reference to the old one.
        self.notes = HashMap::new();
    }
}
