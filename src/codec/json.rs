//! JSON codecs: a structured list for the aggregate file and a structured
//! single-record body for per-note files.

use super::{AggregateCodec, RecordCodec};
use crate::error::{Result, StoreError};
use crate::model::Note;

/// Aggregate codec emitting a JSON array of `{id, content}` objects.
///
/// An empty collection encodes to the empty string rather than `"[]"`, and
/// the empty string decodes to an empty collection; this keeps a freshly
/// created notes file byte-empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonList;

impl AggregateCodec for JsonList {
    fn encode(&self, notes: &[Note]) -> Result<String> {
        if notes.is_empty() {
            return Ok(String::new());
        }
        Ok(serde_json::to_string(notes)?)
    }

    fn decode(&self, data: &str) -> Result<Vec<Note>> {
        if data.is_empty() {
            return Ok(Vec::new());
        }
        // serde_json cannot partially parse an array, so a malformed blob
        // fails as a whole; there is no per-record recovery here.
        serde_json::from_str(data).map_err(|err| StoreError::Decode(err.to_string()))
    }
}

/// Per-record codec storing the whole note as a JSON object.
///
/// The id inside the body is redundant with the filename. On decode the
/// filename-derived id wins, so a renamed file adopts its new identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRecord;

impl RecordCodec for JsonRecord {
    fn encode(&self, note: &Note) -> Result<String> {
        Ok(serde_json::to_string(note)?)
    }

    fn decode(&self, id: &str, body: &str) -> Result<Note> {
        let embedded: Note =
            serde_json::from_str(body).map_err(|err| StoreError::Decode(err.to_string()))?;
        Ok(Note::adopt(id, embedded.content()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_round_trip() {
        let notes = vec![Note::new("first"), Note::new(""), Note::new("third")];
        let encoded = JsonList.encode(&notes).unwrap();
        let decoded = JsonList.decode(&encoded).unwrap();
        assert_eq!(decoded.len(), 3);
        for note in &notes {
            let found = decoded.iter().find(|d| d.id() == note.id()).unwrap();
            assert_eq!(found.content(), note.content());
        }
    }

    #[test]
    fn test_list_empty_encodes_to_empty_string() {
        assert_eq!(JsonList.encode(&[]).unwrap(), "");
        assert!(JsonList.decode("").unwrap().is_empty());
    }

    #[test]
    fn test_list_malformed_is_decode_error() {
        let err = JsonList.decode("[{\"id\": \"x\"").unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
    }

    #[test]
    fn test_record_round_trip_keeps_filename_id() {
        let note = Note::new("body text");
        let body = JsonRecord.encode(&note).unwrap();

        let same = JsonRecord.decode(note.id(), &body).unwrap();
        assert_eq!(same.id(), note.id());
        assert_eq!(same.content(), "body text");

        // A renamed file adopts the filename id over the embedded one.
        let renamed = JsonRecord.decode("other-id", &body).unwrap();
        assert_eq!(renamed.id(), "other-id");
        assert_eq!(renamed.content(), "body text");
    }

    #[test]
    fn test_record_malformed_is_decode_error() {
        let err = JsonRecord.decode("some-id", "not json").unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
    }
}
