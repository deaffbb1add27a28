//! Note repository contract and filesystem implementation.
//!
//! # Responsibility
//! - Persist one note per file inside a single flat directory.
//! - List notes newest-first by scanning the directory on every call.
//!
//! # Invariants
//! - Only entries named `note_<digits>.txt` are treated as notes.
//! - A failed write leaves neither the final file nor its temporary sibling.
//! - Existing note files are never overwritten; the final name is created by
//!   hard-linking the staged file, which fails if the name is taken.

use crate::model::note::{Note, NoteId};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note write operations.
#[derive(Debug)]
pub enum RepoError {
    /// Filesystem call failed.
    Io {
        op: &'static str,
        path: PathBuf,
        source: io::Error,
    },
    /// A note with the same identifier already exists on disk.
    IdCollision(NoteId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { op, path, source } => {
                write!(f, "{op} failed for `{}`: {source}", path.display())
            }
            Self::IdCollision(id) => write!(f, "note already exists: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::IdCollision(_) => None,
        }
    }
}

/// Repository interface for note storage.
pub trait NoteRepository {
    /// Lists every stored note ordered by identifier descending.
    fn list_notes(&self) -> Vec<Note>;
    /// Persists `content` under `id`.
    fn create_note(&self, id: &NoteId, content: &str) -> RepoResult<()>;
    /// Removes the note; returns whether a file was actually removed.
    fn delete_note(&self, id: &NoteId) -> bool;
}

/// Directory-backed note repository.
#[derive(Debug, Clone)]
pub struct FsNoteRepository {
    root: PathBuf,
}

impl FsNoteRepository {
    /// Creates a repository rooted at `root`. The directory is created lazily
    /// on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the on-disk path for `id`.
    pub fn note_path(&self, id: &NoteId) -> PathBuf {
        self.root.join(id.as_str())
    }

    fn staging_path(&self, id: &NoteId) -> PathBuf {
        self.root.join(format!(".{}.tmp", id.as_str()))
    }
}

impl NoteRepository for FsNoteRepository {
    fn list_notes(&self) -> Vec<Note> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(
                    "event=notes_scan module=repo status=empty dir={} error={}",
                    self.root.display(),
                    err
                );
                return Vec::new();
            }
        };

        let mut notes = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("event=notes_scan module=repo status=skip error={err}");
                    continue;
                }
            };
            let file_name = entry.file_name();
            let Some(id) = file_name.to_str().and_then(|name| NoteId::parse(name).ok()) else {
                continue;
            };
            match fs::read_to_string(entry.path()) {
                Ok(content) => notes.push(Note::new(id, content)),
                Err(err) => warn!(
                    "event=note_read module=repo status=skip note_id={} error={}",
                    id, err
                ),
            }
        }

        notes.sort_by(|left, right| right.id.cmp(&left.id));
        notes
    }

    fn create_note(&self, id: &NoteId, content: &str) -> RepoResult<()> {
        fs::create_dir_all(&self.root).map_err(|source| RepoError::Io {
            op: "create_dir",
            path: self.root.clone(),
            source,
        })?;

        let target = self.note_path(id);
        let staging = self.staging_path(id);
        if let Err(source) = write_file_synced(&staging, content) {
            let _ = fs::remove_file(&staging);
            return Err(RepoError::Io {
                op: "write",
                path: staging,
                source,
            });
        }

        // hard_link fails instead of replacing an existing note.
        let linked = fs::hard_link(&staging, &target);
        if let Err(err) = fs::remove_file(&staging) {
            warn!(
                "event=note_staging_cleanup module=repo status=error note_id={} error={}",
                id, err
            );
        }
        match linked {
            Err(source) if source.kind() == io::ErrorKind::AlreadyExists => {
                return Err(RepoError::IdCollision(id.clone()));
            }
            Err(source) => {
                return Err(RepoError::Io {
                    op: "link",
                    path: target,
                    source,
                });
            }
            Ok(()) => {}
        }

        Ok(())
    }

    fn delete_note(&self, id: &NoteId) -> bool {
        let path = self.note_path(id);
        if !path.is_file() {
            return false;
        }
        match fs::remove_file(&path) {
            Ok(()) => true,
            Err(err) => {
                warn!(
                    "event=note_delete module=repo status=error note_id={} error={}",
                    id, err
                );
                false
            }
        }
    }
}

fn write_file_synced(path: &Path, content: &str) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}
