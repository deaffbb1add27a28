//! Note use-case service.
//!
//! # Responsibility
//! - Provide the list/save/delete APIs the UI drives.
//! - Reject blank content before anything touches storage.
//! - Map every outcome to the short notice shown to the user.
//!
//! # Invariants
//! - A rejected save never calls the repository.
//! - Delete with an unknown or malformed id is a silent no-op.
//! - Note content never appears in log lines.

use crate::clock::{Clock, SystemClock};
use crate::model::note::{validate_content, Note, NoteId, NoteValidationError};
use crate::repo::note_repo::{NoteRepository, RepoError};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Transient user-facing message for an operation outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteNotice {
    Saved,
    EmptyContent,
    SaveFailed,
    Deleted,
}

impl NoteNotice {
    pub fn message(self) -> &'static str {
        match self {
            Self::Saved => "Note saved!",
            Self::EmptyContent => "Note cannot be empty",
            Self::SaveFailed => "Error saving note",
            Self::Deleted => "Note deleted",
        }
    }
}

impl Display for NoteNotice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Input rejected before persistence.
    Validation(NoteValidationError),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl NoteServiceError {
    /// Notice the user should see for this failure.
    pub fn notice(&self) -> NoteNotice {
        match self {
            Self::Validation(_) => NoteNotice::EmptyContent,
            Self::Repo(_) => NoteNotice::SaveFailed,
        }
    }
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<NoteValidationError> for NoteServiceError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for NoteServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The note file existed and was removed.
    Deleted(NoteId),
    /// Nothing matched; storage is unchanged.
    NotFound,
}

impl DeleteOutcome {
    /// Notice to show, if any. No-op deletes stay silent.
    pub fn notice(&self) -> Option<NoteNotice> {
        match self {
            Self::Deleted(_) => Some(NoteNotice::Deleted),
            Self::NotFound => None,
        }
    }
}

/// Note service facade over repository implementations.
pub struct NoteService<R: NoteRepository, C: Clock = SystemClock> {
    repo: R,
    clock: C,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service stamping notes with the system clock.
    pub fn new(repo: R) -> Self {
        Self::with_clock(repo, SystemClock)
    }
}

impl<R: NoteRepository, C: Clock> NoteService<R, C> {
    /// Creates a service with a caller-provided time source.
    pub fn with_clock(repo: R, clock: C) -> Self {
        Self { repo, clock }
    }

    /// Lists all notes, newest first. Never fails; unreadable storage is empty.
    pub fn list_notes(&self) -> Vec<Note> {
        let started_at = Instant::now();
        let notes = self.repo.list_notes();
        info!(
            "event=notes_list module=service status=ok count={} duration_ms={}",
            notes.len(),
            started_at.elapsed().as_millis()
        );
        notes
    }

    /// Saves `content` as a new note stamped with the current time.
    ///
    /// # Errors
    /// - `Validation(BlankContent)` when content is empty or whitespace-only.
    /// - `Repo(..)` when the write fails; no file is left behind.
    pub fn save_note(&self, content: impl Into<String>) -> Result<Note, NoteServiceError> {
        let content = content.into();
        if let Err(err) = validate_content(&content) {
            warn!("event=note_save module=service status=rejected reason=blank_content");
            return Err(err.into());
        }

        let started_at = Instant::now();
        let id = NoteId::from_epoch_ms(self.clock.now_epoch_ms());
        match self.repo.create_note(&id, &content) {
            Ok(()) => {
                info!(
                    "event=note_save module=service status=ok note_id={} bytes={} duration_ms={}",
                    id,
                    content.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(Note::new(id, content))
            }
            Err(err) => {
                error!(
                    "event=note_save module=service status=error note_id={} duration_ms={} error={}",
                    id,
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }

    /// Deletes the note named by `note_id`, if it exists.
    pub fn delete_note(&self, note_id: &str) -> DeleteOutcome {
        let Ok(id) = NoteId::parse(note_id) else {
            warn!("event=note_delete module=service status=noop reason=invalid_id");
            return DeleteOutcome::NotFound;
        };

        if self.repo.delete_note(&id) {
            info!("event=note_delete module=service status=ok note_id={id}");
            DeleteOutcome::Deleted(id)
        } else {
            info!("event=note_delete module=service status=noop note_id={id}");
            DeleteOutcome::NotFound
        }
    }
}
