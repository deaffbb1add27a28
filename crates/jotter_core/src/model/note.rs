//! Note domain model.
//!
//! # Responsibility
//! - Define the note record and its timestamp-derived identifier.
//! - Validate identifiers and content before they reach storage.
//!
//! # Invariants
//! - `NoteId` always has the shape `note_<digits>.txt`.
//! - `NoteId` ordering is lexicographic on the file name.
//! - Persisted content is never blank.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// File name prefix shared by every note file.
pub const NOTE_FILE_PREFIX: &str = "note_";
/// File name suffix shared by every note file.
pub const NOTE_FILE_SUFFIX: &str = ".txt";

static NOTE_FILE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^note_([0-9]+)\.txt$").expect("valid note file name regex"));

/// Validation errors for note content and identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Content is empty or whitespace-only.
    BlankContent,
    /// Identifier does not match `note_<millis>.txt`.
    InvalidId(String),
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankContent => write!(f, "note content cannot be blank"),
            Self::InvalidId(value) => write!(f, "invalid note id: `{value}`"),
        }
    }
}

impl Error for NoteValidationError {}

/// Timestamp-derived note identifier, doubling as the storage file name.
///
/// Ordering compares the file name as a string, so ids with the same digit
/// count sort chronologically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteId(String);

impl NoteId {
    /// Builds the identifier for a note created at `epoch_ms`.
    pub fn from_epoch_ms(epoch_ms: u64) -> Self {
        Self(format!("{NOTE_FILE_PREFIX}{epoch_ms}{NOTE_FILE_SUFFIX}"))
    }

    /// Parses a file name into an identifier.
    ///
    /// # Errors
    /// - Returns `InvalidId` unless the whole value matches `note_<digits>.txt`.
    pub fn parse(value: &str) -> Result<Self, NoteValidationError> {
        let Some(caps) = NOTE_FILE_NAME_RE.captures(value) else {
            return Err(NoteValidationError::InvalidId(value.to_string()));
        };
        // Digit runs longer than u64 cannot come from a real clock.
        if caps[1].parse::<u64>().is_err() {
            return Err(NoteValidationError::InvalidId(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    /// Returns the file name form.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the creation timestamp encoded in the file name.
    pub fn created_at_ms(&self) -> u64 {
        self.0[NOTE_FILE_PREFIX.len()..self.0.len() - NOTE_FILE_SUFFIX.len()]
            .parse()
            .unwrap_or_default()
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for NoteId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NoteId::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// One persisted note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Storage key and sort key.
    pub id: NoteId,
    /// Raw UTF-8 text exactly as saved.
    pub content: String,
}

impl Note {
    pub fn new(id: NoteId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }
}

/// Rejects content that is empty or made only of blank characters.
pub fn validate_content(content: &str) -> Result<(), NoteValidationError> {
    if content.chars().all(is_blank_char) {
        return Err(NoteValidationError::BlankContent);
    }
    Ok(())
}

/// Blank set used by the mobile UI: ASCII controls `\t`..`\r`, the
/// separators `U+001C`..`U+001F`, and Unicode space/line/paragraph
/// separators (Zs, Zl, Zp, non-breaking spaces included). `U+0085` is not
/// blank, unlike `char::is_whitespace`.
fn is_blank_char(c: char) -> bool {
    matches!(
        c,
        '\t'..='\r'
            | '\u{1C}'..='\u{1F}'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

#[cfg(test)]
mod tests {
    use super::{validate_content, NoteId, NoteValidationError};

    #[test]
    fn from_epoch_ms_builds_file_name() {
        let id = NoteId::from_epoch_ms(1_700_000_000_123);
        assert_eq!(id.as_str(), "note_1700000000123.txt");
        assert_eq!(id.created_at_ms(), 1_700_000_000_123);
    }

    #[test]
    fn parse_rejects_foreign_and_traversal_names() {
        for raw in [
            "",
            "note_.txt",
            "note_12.md",
            "memo_12.txt",
            "../note_12.txt",
            "dir/note_12.txt",
            "note_12.txt.tmp",
            "note_-1.txt",
            "note_99999999999999999999999.txt",
        ] {
            let err = NoteId::parse(raw).expect_err("malformed id must be rejected");
            assert_eq!(err, NoteValidationError::InvalidId(raw.to_string()));
        }
    }

    #[test]
    fn ordering_is_lexicographic_on_file_name() {
        let older = NoteId::parse("note_1700000000000.txt").unwrap();
        let newer = NoteId::parse("note_1700000000001.txt").unwrap();
        assert!(newer > older);
        // Shorter digit runs compare as strings, not numbers.
        assert!(NoteId::parse("note_9.txt").unwrap() > NoteId::parse("note_10.txt").unwrap());
    }

    #[test]
    fn validate_content_rejects_whitespace_only() {
        assert_eq!(
            validate_content(" \n\t "),
            Err(NoteValidationError::BlankContent)
        );
        assert!(validate_content("  x ").is_ok());
    }

    #[test]
    fn blank_set_matches_ui_rules_at_the_edges() {
        assert_eq!(
            validate_content("\u{1C}\u{A0}\u{2028}\u{3000}"),
            Err(NoteValidationError::BlankContent)
        );
        assert!(validate_content("\u{85}").is_ok());
        assert!(validate_content("\u{200B}").is_ok());
    }
}
