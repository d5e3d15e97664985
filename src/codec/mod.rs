//! Serialization seams for the file-backed stores.
//!
//! Two small capabilities are injected into the generic stores instead of
//! being baked in by subclassing:
//!
//! - [`AggregateCodec`]: a whole collection of notes to/from one text blob
//!   (the aggregate-file store). Implementations: [`JsonList`],
//!   [`DelimitedPairs`].
//! - [`RecordCodec`]: a single note body to/from one file, with the id
//!   carried by the filename (the per-record-file store). Implementations:
//!   [`PlainText`], [`JsonRecord`].
//!
//! None of the on-disk formats carry a header or version field, so a reader
//! cannot tell which codec produced a file without being told out-of-band;
//! that is what the per-directory config is for.

use crate::error::Result;
use crate::model::Note;

pub mod json;
pub mod pairs;
pub mod text;

pub use json::{JsonList, JsonRecord};
pub use pairs::DelimitedPairs;
pub use text::PlainText;

/// Serialize a sequence of notes to one text blob and back.
///
/// Both directions are pure. Empty input encodes to the empty string, and
/// the empty string decodes to an empty sequence.
pub trait AggregateCodec {
    fn encode(&self, notes: &[Note]) -> Result<String>;
    fn decode(&self, data: &str) -> Result<Vec<Note>>;
}

/// Serialize one note's file body. The id is implied by the filename and is
/// passed back in on decode; codecs that embed the id redundantly must let
/// the filename-derived id win.
pub trait RecordCodec {
    fn encode(&self, note: &Note) -> Result<String>;
    fn decode(&self, id: &str, body: &str) -> Result<Note>;
}
