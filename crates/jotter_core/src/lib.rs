//! Core domain logic for Jotter.
//! This crate owns the note store: identifiers, file persistence, and the
//! list/save/delete use-cases every front end calls.

pub mod clock;
pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use clock::{Clock, SystemClock};
pub use config::{StoreConfig, NOTES_DIR_ENV};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::note::{validate_content, Note, NoteId, NoteValidationError};
pub use repo::note_repo::{FsNoteRepository, NoteRepository, RepoError, RepoResult};
pub use service::note_service::{DeleteOutcome, NoteNotice, NoteService, NoteServiceError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
