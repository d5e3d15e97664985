//! Aggregate-file strategy: the whole collection in one `notes.txt`.
//!
//! The file is read once at construction; from then on the in-memory map
//! serves every read and the file is re-encoded wholesale through the
//! atomic replace on every mutation. A failed flush is logged and not
//! rolled back, so the cache can run ahead of the disk until the next
//! successful flush.

use super::{atomic, NoteStore};
use crate::codec::AggregateCodec;
use crate::error::{Result, StoreError};
use crate::model::Note;
use log::warn;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed name of the aggregate file inside the configured directory.
pub const NOTES_FILE_NAME: &str = "notes.txt";

/// [`NoteStore`] holding every note in a single file encoded by `C`.
#[derive(Debug)]
pub struct FileStore<C: AggregateCodec> {
    path: PathBuf,
    codec: C,
    notes: HashMap<String, Note>,
}

/// Aggregate store with the JSON array encoding.
pub type JsonFileStore = FileStore<crate::codec::JsonList>;
/// Aggregate store with the delimited-pair encoding.
pub type PairsFileStore = FileStore<crate::codec::DelimitedPairs>;

impl<C: AggregateCodec> FileStore<C> {
    /// Open the store over `<dir>/notes.txt`.
    ///
    /// An absent file is created empty; an existing one is read and decoded
    /// in full. Failure to create, read, or decode the file is fatal: the
    /// strategy cannot come up at all.
    pub fn open(dir: impl AsRef<Path>, codec: C) -> Result<Self> {
        let path = dir.as_ref().join(NOTES_FILE_NAME);
        let construction = |reason: String| StoreError::Construction {
            path: path.clone(),
            reason,
        };

        let notes = if path.exists() {
            let data = fs::read_to_string(&path).map_err(|err| construction(err.to_string()))?;
            let decoded = codec
                .decode(&data)
                .map_err(|err| construction(err.to_string()))?;
            decoded
                .into_iter()
                .map(|note| (note.id().to_string(), note))
                .collect()
        } else {
            fs::write(&path, "").map_err(|err| construction(err.to_string()))?;
            HashMap::new()
        };

        Ok(Self { path, codec, notes })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-encode the entire collection and replace the file. Returns
    /// whether the disk now matches the cache; a `false` has already been
    /// logged.
    fn flush(&self) -> bool {
        let all: Vec<Note> = self.notes.values().cloned().collect();
        let data = match self.codec.encode(&all) {
            Ok(data) => data,
            Err(err) => {
                warn!(
                    "cannot encode notes for {}: {err} - the file no longer matches the cache",
                    self.path.display()
                );
                return false;
            }
        };
        match atomic::replace_file(&self.path, &data) {
            Ok(()) => true,
            Err(err) => {
                warn!(
                    "cannot rewrite {}: {err} - the file no longer matches the cache",
                    self.path.display()
                );
                false
            }
        }
    }
}

impl<C: AggregateCodec> NoteStore for FileStore<C> {
    fn create_with_content(&mut self, content: &str) -> Result<String> {
        let note = Note::new(content);
        let id = note.id().to_string();
        self.notes.insert(id.clone(), note);
        self.flush();
        Ok(id)
    }

    fn create_from(&mut self, note: &Note) -> Result<String> {
        self.create_with_content(note.content())
    }

    fn get(&self, id: &str) -> Result<Note> {
        if id.is_empty() {
            return Err(StoreError::blank_id());
        }
        // Reads never touch the file; the cache is authoritative until the
        // next restart.
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
        let updated = current.duplicate();
        self.flush();
        Ok(updated)
    }

    fn delete(&mut self, id: &str) -> Result<bool> {
        if id.is_empty() {
            return Err(StoreError::blank_id());
        }
        // Unknown ids are a no-op; the boolean reports the flush outcome.
        self.notes.remove(id);
        Ok(self.flush())
    }

    fn delete_all(&mut self) {
        if let Err(err) = atomic::replace_file(&self.path, "") {
            warn!(
                "cannot truncate {}: {err} - deleted notes may still be on disk",
                self.path.display()
            );
        }
        self.notes = HashMap::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{DelimitedPairs, JsonList};
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_empty_file() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path(), JsonList).unwrap();

        assert_eq!(store.count(), 0);
        let on_disk = fs::read_to_string(dir.path().join(NOTES_FILE_NAME)).unwrap();
        assert_eq!(on_disk, "");
    }

    #[test]
    fn test_mutations_rewrite_the_whole_file() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::open(dir.path(), JsonList).unwrap();

        let id = store.create_with_content("hello").unwrap();
        let on_disk = fs::read_to_string(store.path()).unwrap();
        let decoded = JsonList.decode(&on_disk).unwrap();
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].id(), id);
        assert_eq!(decoded[0].content(), "hello");

        store.update(&Note::adopt(&id, "changed")).unwrap();
        let on_disk = fs::read_to_string(store.path()).unwrap();
        assert_eq!(JsonList.decode(&on_disk).unwrap()[0].content(), "changed");

        assert!(store.delete(&id).unwrap());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "");
    }

    #[test]
    fn test_open_on_unwritable_location_is_construction_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("no-such-dir");
        let err = FileStore::open(&missing, JsonList).unwrap_err();
        assert!(matches!(err, StoreError::Construction { .. }));
    }

    #[test]
    fn test_open_on_corrupt_file_is_construction_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(NOTES_FILE_NAME), "{{nonsense").unwrap();
        let err = FileStore::open(dir.path(), JsonList).unwrap_err();
        assert!(matches!(err, StoreError::Construction { .. }));
    }

    #[test]
    fn test_cache_survives_reserved_separator_flush_failure() {
        // The pairs codec refuses to encode content holding its own
        // markers; the mutation stays in the cache and the file keeps its
        // previous state. Cache ahead of disk, by design.
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::open(dir.path(), DelimitedPairs).unwrap();
        let id = store.create_with_content("clean").unwrap();

        let poisoned = format!("costs {} dollars", crate::codec::pairs::RECORD_SEP);
        let updated = store.update(&Note::adopt(&id, &poisoned)).unwrap();
        assert_eq!(updated.content(), poisoned);
        assert_eq!(store.get(&id).unwrap().content(), poisoned);

        let on_disk = fs::read_to_string(store.path()).unwrap();
        let decoded = DelimitedPairs.decode(&on_disk).unwrap();
        assert_eq!(decoded[0].content(), "clean");
    }

    #[test]
    fn test_delete_all_truncates_file() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::open(dir.path(), JsonList).unwrap();
        store.create_with_content("a").unwrap();
        store.create_with_content("b").unwrap();

        store.delete_all();

        assert_eq!(store.count(), 0);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "");
        // Idempotent on empty.
        store.delete_all();
        assert_eq!(store.count(), 0);
    }
}
