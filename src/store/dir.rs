//! Per-record-file strategy: one file per note inside a directory.
//!
//! The filename carries the identity: `<id><ext>`, extension fixed per
//! instance. Only the set of known ids is cached; every read goes back to
//! disk, so the directory stays the source of truth.

use super::{atomic, NoteStore};
use crate::codec::RecordCodec;
use crate::error::{Result, StoreError};
use crate::model::Note;
use log::warn;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default extension for note files.
pub const DEFAULT_FILE_EXT: &str = ".txt";

/// [`NoteStore`] keeping one file per note, body encoded by `C`.
pub struct DirStore<C: RecordCodec> {
    dir: PathBuf,
    file_ext: String,
    codec: C,
    ids: HashSet<String>,
}

/// Per-record store with plain-text bodies (content == entire file).
pub type TextDirStore = DirStore<crate::codec::PlainText>;
/// Per-record store with JSON object bodies.
pub type JsonDirStore = DirStore<crate::codec::JsonRecord>;

impl<C: RecordCodec> DirStore<C> {
    /// Open a store over `dir`, building the known-id set from a
    /// non-recursive scan for files with the given extension.
    ///
    /// A missing or unreadable directory yields an empty store, not an
    /// error; the directory is created lazily on the first write.
    pub fn open(dir: impl AsRef<Path>, codec: C, file_ext: &str) -> Self {
        let dir = dir.as_ref().to_path_buf();
        let file_ext = normalize_ext(file_ext);
        let ids = scan_ids(&dir, &file_ext);
        Self {
            dir,
            file_ext,
            codec,
            ids,
        }
    }

    pub fn file_ext(&self) -> &str {
        &self.file_ext
    }

    fn note_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}{}", id, self.file_ext))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        Ok(())
    }

    fn write_note(&self, note: &Note) -> Result<()> {
        self.ensure_dir()?;
        let body = self.codec.encode(note)?;
        atomic::replace_file(&self.note_path(note.id()), &body)?;
        Ok(())
    }

    fn read_note(&self, id: &str) -> Result<Note> {
        let body = fs::read_to_string(self.note_path(id))?;
        self.codec.decode(id, &body)
    }
}

impl<C: RecordCodec> NoteStore for DirStore<C> {
    fn create_with_content(&mut self, content: &str) -> Result<String> {
        let note = Note::new(content);
        // The write must complete before the id becomes known; a failed
        // create leaves no trace.
        self.write_note(&note)?;
        let id = note.id().to_string();
        self.ids.insert(id.clone());
        Ok(id)
    }

    fn create_from(&mut self, note: &Note) -> Result<String> {
        self.create_with_content(note.content())
    }

    fn get(&self, id: &str) -> Result<Note> {
        if id.is_empty() {
            return Err(StoreError::blank_id());
        }
        if !self.ids.contains(id) {
            return Err(StoreError::NotFound(id.to_string()));
        }
        self.read_note(id)
    }

    fn get_all(&self) -> Result<Vec<Note>> {
        let mut notes = Vec::with_capacity(self.ids.len());
        for id in &self.ids {
            match self.read_note(id) {
                Ok(note) => notes.push(note),
                // One unreadable file must not fail the whole enumeration.
                Err(err) => warn!("skipping note {id}: {err}"),
            }
        }
        Ok(notes)
    }

    fn count(&self) -> usize {
        self.ids.len()
    }

    fn update(&mut self, note: &Note) -> Result<Note> {
        if note.id().is_empty() {
            return Err(StoreError::blank_id());
        }
        if !self.ids.contains(note.id()) {
            return Err(StoreError::NotFound(note.id().to_string()));
        }
        let updated = Note::adopt(note.id(), note.content());
        self.write_note(&updated)?;
        Ok(updated)
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        if id.is_empty() {
            return Err(StoreError::blank_id());
        }
        match fs::remove_file(self.note_path(id)) {
            Ok(()) => {
                self.ids.remove(id);
                Ok(true)
            }
            // The file is already gone, so the id no longer names anything
            // on disk; forget it instead of counting it until restart.
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                self.ids.remove(id);
                Ok(false)
            }
            // Denied removal means the file is still there; the id stays
            // known.
            Err(err) => {
                warn!("cannot delete note file for {id}: {err}");
                Ok(false)
            }
        }
    }

    fn delete_all(&mut self) {
        let ids: Vec<String> = self.ids.iter().cloned().collect();
        for id in ids {
            match self.delete(&id) {
                Ok(true) => {}
                Ok(false) => warn!("note {id} was not deleted; it may still be on disk"),
                Err(err) => warn!("error while deleting note {id}: {err}"),
            }
        }
    }
}

fn normalize_ext(ext: &str) -> String {
    if ext.is_empty() {
        DEFAULT_FILE_EXT.to_string()
    } else if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}

fn scan_ids(dir: &Path, ext: &str) -> HashSet<String> {
    let mut ids = HashSet::new();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        // Absent or unreadable directory: empty known-id set.
        Err(_) => return ids,
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if let Some(stem) = name.strip_suffix(ext) {
            if !stem.is_empty() {
                ids.insert(stem.to_string());
            }
        }
    }
    ids
}
