//! # Storage Layer
//!
//! The [`NoteStore`] trait is the one boundary the shell crosses: a uniform
//! create/read/update/delete/enumerate contract implemented by three
//! strategies.
//!
//! - [`MemoryStore`](memory::MemoryStore): process-local map, no
//!   durability. Fallback when no file strategy can be constructed, and the
//!   workhorse of tests.
//! - [`DirStore`](dir::DirStore): one file per note in a directory, body
//!   encoded by an injected [`RecordCodec`](crate::codec::RecordCodec).
//!   Truth lives on disk; only the set of known ids is cached.
//! - [`FileStore`](aggregate::FileStore): the whole collection in one
//!   `notes.txt`, encoded by an injected
//!   [`AggregateCodec`](crate::codec::AggregateCodec). The file is read
//!   once at construction and rewritten wholesale on every mutation.
//!
//! Every durable write goes through [`atomic::replace_file`], so a crash
//! mid-write leaves either the old file or the new file, never a torn one.
//!
//! ## Concurrency
//!
//! All operations are synchronous and run to completion on the caller's
//! thread; there is no internal locking and no protection against two
//! owners mutating the same directory. The contract assumes a single
//! logical owner per storage directory. [`lock::DirLock`] offers an
//! opt-in advisory lock for callers that want that assumption enforced.

use crate::config::StorageKind;
use crate::error::Result;
use crate::model::Note;
use std::path::Path;

pub mod aggregate;
pub mod atomic;
pub mod dir;
pub mod lock;
pub mod memory;

pub use aggregate::{FileStore, JsonFileStore, PairsFileStore, NOTES_FILE_NAME};
pub use dir::{DirStore, JsonDirStore, TextDirStore};
pub use lock::DirLock;
pub use memory::MemoryStore;

/// The storage contract, uniform across all strategies.
pub trait NoteStore {
    /// Create an empty note, persist it, and return its id.
    fn create(&mut self) -> Result<String> {
        self.create_with_content("")
    }

    /// Create a note with the given content, persist it, and return its id.
    ///
    /// File strategies complete the durable write before returning, so a
    /// returned id always names a recorded note (the aggregate strategy's
    /// warning-only flush is the documented exception).
    fn create_with_content(&mut self, content: &str) -> Result<String>;

    /// Create a note copying only the content of `note`. The input id is
    /// ignored and a fresh one is generated: callers cannot dictate
    /// identity, which keeps id collisions out of untrusted input.
    fn create_from(&mut self, note: &Note) -> Result<String>;

    /// Get the note with the given id, as an owned duplicate.
    fn get(&self, id: &str) -> Result<Note>;

    /// Every currently known note, in no particular order.
    fn get_all(&self) -> Result<Vec<Note>>;

    /// Size of the known collection.
    fn count(&self) -> usize;

    /// Overwrite the content of the stored note matching `note`'s id and
    /// persist; returns the post-update note.
    fn update(&mut self, note: &Note) -> Result<Note>;

    /// Delete the note with the given id. `Ok(false)` means the deletion
    /// could not be completed (it is not an error); deleting an unknown id
    /// is a no-op success for the in-memory and aggregate strategies, while
    /// the per-record-file strategy reports the file-removal outcome.
    fn delete(&mut self, id: &str) -> Result<bool>;

    /// Remove every note. Never fails, even on an already-empty
    /// collection; problems are logged, not surfaced.
    fn delete_all(&mut self);
}

/// Construct the strategy selected by `kind` for `dir`.
///
/// `file_ext` only applies to the per-record-file strategies. Construction
/// errors mean the strategy cannot come up at all; the shell answers those
/// by falling back to [`MemoryStore`] with an explicit warning.
pub fn open_store(kind: StorageKind, dir: &Path, file_ext: &str) -> Result<Box<dyn NoteStore>> {
    use crate::codec::{DelimitedPairs, JsonList, JsonRecord, PlainText};

    Ok(match kind {
        StorageKind::Memory => Box::new(MemoryStore::new()),
        StorageKind::TextDir => Box::new(DirStore::open(dir, PlainText, file_ext)),
        StorageKind::JsonDir => Box::new(DirStore::open(dir, JsonRecord, file_ext)),
        StorageKind::JsonFile => Box::new(FileStore::open(dir, JsonList)?),
        StorageKind::PairsFile => Box::new(FileStore::open(dir, DelimitedPairs)?),
    })
}
