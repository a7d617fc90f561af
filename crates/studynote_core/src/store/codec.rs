//! JSON encoding of the persisted note list.
//!
//! Format: `[{"id": <number>, "text": <string>}, ...]`, newest first, with no
//! envelope or version field.

use crate::model::note::Note;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Reason a persisted value could not be read back as a note list.
#[derive(Debug)]
pub enum DecodeError {
    /// Value is empty or whitespace only.
    Blank,
    /// Value is not a JSON array of `{id, text}` objects.
    Malformed(serde_json::Error),
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(f, "persisted notes value is blank"),
            Self::Malformed(err) => write!(f, "persisted notes value is malformed: {err}"),
        }
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Blank => None,
            Self::Malformed(err) => Some(err),
        }
    }
}

/// Serializes notes in slot order.
pub fn encode_notes(notes: &[Note]) -> Result<String, serde_json::Error> {
    serde_json::to_string(notes)
}

/// Parses a persisted slot value.
pub fn decode_notes(raw: &str) -> Result<Vec<Note>, DecodeError> {
    if raw.trim().is_empty() {
        return Err(DecodeError::Blank);
    }
    serde_json::from_str(raw).map_err(DecodeError::Malformed)
}

#[cfg(test)]
mod tests {
    use super::{decode_notes, encode_notes, DecodeError};
    use crate::model::note::Note;

    #[test]
    fn encoded_objects_carry_only_id_and_text() {
        let raw = encode_notes(&[Note::new(7, "hello")]).expect("notes should encode");
        assert_eq!(raw, r#"[{"id":7,"text":"hello"}]"#);
    }

    #[test]
    fn decode_rejects_blank_and_non_array_values() {
        assert!(matches!(decode_notes("  "), Err(DecodeError::Blank)));
        assert!(matches!(decode_notes("null"), Err(DecodeError::Malformed(_))));
        assert!(matches!(
            decode_notes(r#"{"id":1,"text":"x"}"#),
            Err(DecodeError::Malformed(_))
        ));
        assert!(matches!(
            decode_notes(r#"[{"id":"1","text":"x"}]"#),
            Err(DecodeError::Malformed(_))
        ));
    }

    #[test]
    fn decode_tolerates_extra_fields() {
        let notes = decode_notes(r#"[{"id":3,"text":"x","pinned":true}]"#)
            .expect("extra fields should be ignored");
        assert_eq!(notes, vec![Note::new(3, "x")]);
    }
}
