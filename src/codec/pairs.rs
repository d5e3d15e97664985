//! Delimited-pair codec: each note rendered as `id⁃content`, records joined
//! by `∞`.
//!
//! The markers are U+2043 HYPHEN BULLET and U+221E INFINITY, both multi-byte
//! UTF-8 sequences that never appear in normal note text. There is no
//! escaping, so content containing either marker would produce a blob the
//! decoder cannot read back; the encoder rejects such content up front
//! instead of writing it.

use super::AggregateCodec;
use crate::error::{Result, StoreError};
use crate::model::Note;

/// Separator between a record's id and its content.
pub const FIELD_SEP: &str = "\u{2043}";
/// Separator between records.
pub const RECORD_SEP: &str = "\u{221E}";

/// Aggregate codec using the two-level separator scheme.
///
/// The field separator is emitted even for empty content, so `id⁃` is a
/// well-formed empty-content record and a piece with no field separator is
/// unambiguously malformed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelimitedPairs;

impl AggregateCodec for DelimitedPairs {
    fn encode(&self, notes: &[Note]) -> Result<String> {
        let mut pairs = Vec::with_capacity(notes.len());
        for note in notes {
            if note.id().contains(FIELD_SEP) || note.id().contains(RECORD_SEP) {
                return Err(StoreError::InvalidArgument(format!(
                    "note id {} contains a reserved separator",
                    note.id()
                )));
            }
            if note.content().contains(FIELD_SEP) || note.content().contains(RECORD_SEP) {
                return Err(StoreError::InvalidArgument(format!(
                    "content of note {} contains a reserved separator",
                    note.id()
                )));
            }
            pairs.push(format!("{}{}{}", note.id(), FIELD_SEP, note.content()));
        }
        Ok(pairs.join(RECORD_SEP))
    }

    fn decode(&self, data: &str) -> Result<Vec<Note>> {
        if data.is_empty() {
            return Ok(Vec::new());
        }
        let mut notes = Vec::new();
        for piece in data.split(RECORD_SEP) {
            let Some((id, content)) = piece.split_once(FIELD_SEP) else {
                return Err(StoreError::Decode(format!(
                    "record {piece:?} is missing the id/content separator"
                )));
            };
            notes.push(Note::adopt(id, content));
        }
        Ok(notes)
    }
}
