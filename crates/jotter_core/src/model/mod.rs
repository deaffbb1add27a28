//! Domain model for file-backed notes.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Own identifier parsing so storage keys are validated in one place.
//!
//! # Invariants
//! - Every note is identified by a `NoteId` derived from its creation time.
//! - Notes are immutable once created; there is no update path.

pub mod note;
