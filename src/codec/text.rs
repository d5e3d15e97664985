//! Plain-text record codec: the file body is the note content, verbatim.

use super::RecordCodec;
use crate::error::Result;
use crate::model::Note;

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl RecordCodec for PlainText {
    fn encode(&self, note: &Note) -> Result<String> {
        Ok(note.content().to_string())
    }

    fn decode(&self, id: &str, body: &str) -> Result<Note> {
        Ok(Note::adopt(id, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_is_content_verbatim() {
        let note = Note::new("line one\nline two");
        let body = PlainText.encode(&note).unwrap();
        assert_eq!(body, "line one\nline two");

        let back = PlainText.decode(note.id(), &body).unwrap();
        assert_eq!(back.id(), note.id());
        assert_eq!(back.content(), note.content());
    }
}
