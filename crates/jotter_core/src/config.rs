//! Store configuration.
//!
//! # Responsibility
//! - Resolve the notes directory from explicit input, environment, or default.
//!
//! # Invariants
//! - Blank values never win resolution; they fall through to the next source.

use crate::repo::note_repo::FsNoteRepository;
use std::path::PathBuf;

/// Environment variable overriding the notes directory.
pub const NOTES_DIR_ENV: &str = "JOTTER_NOTES_DIR";
const DEFAULT_NOTES_DIR_NAME: &str = "jotter_notes";

/// Where the note store keeps its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub notes_dir: PathBuf,
}

impl StoreConfig {
    pub fn new(notes_dir: impl Into<PathBuf>) -> Self {
        Self {
            notes_dir: notes_dir.into(),
        }
    }

    /// Resolves the notes directory.
    ///
    /// Order: `explicit` (non-blank) -> `JOTTER_NOTES_DIR` (non-blank) ->
    /// `<temp_dir>/jotter_notes`.
    pub fn resolve(explicit: Option<&str>) -> Self {
        Self::resolve_with(explicit, std::env::var(NOTES_DIR_ENV).ok().as_deref())
    }

    fn resolve_with(explicit: Option<&str>, env_value: Option<&str>) -> Self {
        let chosen = [explicit, env_value]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|value| !value.is_empty());
        match chosen {
            Some(value) => Self::new(value),
            None => Self::new(std::env::temp_dir().join(DEFAULT_NOTES_DIR_NAME)),
        }
    }

    /// Opens a filesystem repository over the configured directory.
    pub fn open_repository(&self) -> FsNoteRepository {
        FsNoteRepository::new(self.notes_dir.clone())
    }
}
