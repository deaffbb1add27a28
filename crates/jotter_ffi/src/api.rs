//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the note store's list/save/delete to Dart via FRB.
//! - Turn every outcome into an envelope carrying the notice to display.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Save and delete responses carry the reloaded list so the UI redraws once.
//! - The notes directory is configured at most once per process.

use jotter_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    FsNoteRepository, Note, NoteNotice, NoteService, StoreConfig,
};
use log::info;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static NOTES_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Points the store at the app-private files directory.
///
/// # FFI contract
/// - Call before the first list/save/delete; later calls with the same path
///   are accepted, a different path is rejected.
/// - Without this call the store falls back to `JOTTER_NOTES_DIR` or the
///   temp directory.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn configure_notes_dir(path: String) -> String {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return "notes_dir cannot be empty".to_string();
    }
    if !Path::new(trimmed).is_absolute() {
        return format!("notes_dir must be an absolute path, got `{trimmed}`");
    }

    let active = NOTES_DIR.get_or_init(|| PathBuf::from(trimmed));
    if active.as_path() != Path::new(trimmed) {
        return format!(
            "notes_dir already configured at `{}`; refusing to switch to `{trimmed}`",
            active.display()
        );
    }
    info!("event=notes_dir_configured module=ffi status=ok");
    String::new()
}

/// One note as rendered by the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    /// Storage key (`note_<millis>.txt`), passed back to `note_delete`.
    pub note_id: String,
    pub content: String,
    pub created_at_ms: u64,
}

/// List response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesListResponse {
    /// Notes sorted newest first.
    pub items: Vec<NoteItem>,
    /// Human-readable summary for diagnostics.
    pub message: String,
}

/// Save/delete response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteActionResponse {
    /// Whether the operation changed storage.
    pub ok: bool,
    /// Affected note id, when one exists.
    pub note_id: Option<String>,
    /// Transient notification text; `None` means show nothing.
    pub notice: Option<String>,
    /// Full list after the operation.
    pub items: Vec<NoteItem>,
}

/// Lists every saved note, newest first.
///
/// # FFI contract
/// - Never panics; unreadable storage yields an empty list.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_list() -> NotesListResponse {
    let items = to_note_items(note_service().list_notes());
    let message = if items.is_empty() {
        "No notes.".to_string()
    } else {
        format!("Found {} note(s).", items.len())
    };
    NotesListResponse { items, message }
}

/// Saves `content` as a new note.
///
/// # FFI contract
/// - Blank content returns `ok=false` with notice `Note cannot be empty`.
/// - Write failures return `ok=false` with notice `Error saving note`.
/// - Content is stored exactly as given.
#[flutter_rust_bridge::frb(sync)]
pub fn note_save(content: String) -> NoteActionResponse {
    let service = note_service();
    match service.save_note(content) {
        Ok(note) => NoteActionResponse {
            ok: true,
            note_id: Some(note.id.to_string()),
            notice: Some(NoteNotice::Saved.message().to_string()),
            items: to_note_items(service.list_notes()),
        },
        Err(err) => NoteActionResponse {
            ok: false,
            note_id: None,
            notice: Some(err.notice().message().to_string()),
            items: to_note_items(service.list_notes()),
        },
    }
}

/// Deletes one note by id.
///
/// # FFI contract
/// - Unknown or malformed ids return `ok=false` with no notice.
#[flutter_rust_bridge::frb(sync)]
pub fn note_delete(note_id: String) -> NoteActionResponse {
    let service = note_service();
    let outcome = service.delete_note(note_id.as_str());
    let notice = outcome.notice().map(|notice| notice.message().to_string());
    let ok = notice.is_some();
    NoteActionResponse {
        ok,
        note_id: ok.then_some(note_id),
        notice,
        items: to_note_items(service.list_notes()),
    }
}

fn resolve_notes_dir() -> PathBuf {
    match NOTES_DIR.get() {
        Some(dir) => dir.clone(),
        None => StoreConfig::resolve(None).notes_dir,
    }
}

fn note_service() -> NoteService<FsNoteRepository> {
    NoteService::new(FsNoteRepository::new(resolve_notes_dir()))
}

fn to_note_items(notes: Vec<Note>) -> Vec<NoteItem> {
    notes
        .into_iter()
        .map(|note| NoteItem {
            created_at_ms: note.id.created_at_ms(),
            note_id: note.id.to_string(),
            content: note.content,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        configure_notes_dir, core_version, init_logging, note_delete, note_save, notes_list, ping,
        resolve_notes_dir,
    };
    use std::sync::OnceLock;
    use std::time::{SystemTime, UNIX_EPOCH};

    /// Process-wide notes dir shared by every test in this module.
    fn test_notes_dir() -> &'static tempfile::TempDir {
        static DIR: OnceLock<tempfile::TempDir> = OnceLock::new();
        DIR.get_or_init(|| {
            let dir = tempfile::tempdir().expect("create temp notes dir");
            let error = configure_notes_dir(dir.path().to_string_lossy().into_owned());
            assert!(error.is_empty(), "{error}");
            dir
        })
    }

    fn unique_token(prefix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time went backwards")
            .as_nanos();
        format!("{prefix}-{nanos}")
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn configure_notes_dir_rejects_relative_and_conflicting_paths() {
        let dir = test_notes_dir();
        assert!(!configure_notes_dir("relative/notes".to_string()).is_empty());
        assert!(configure_notes_dir(dir.path().to_string_lossy().into_owned()).is_empty());
        assert!(configure_notes_dir("/somewhere/else".to_string()).contains("refusing"));
        assert_eq!(resolve_notes_dir(), dir.path());
    }

    #[test]
    fn note_save_rejects_blank_content_with_notice() {
        test_notes_dir();
        let response = note_save("   ".to_string());
        assert!(!response.ok);
        assert_eq!(response.note_id, None);
        assert_eq!(response.notice.as_deref(), Some("Note cannot be empty"));
    }

    #[test]
    fn note_save_then_delete_updates_list() {
        test_notes_dir();
        let token = unique_token("ffi-note");
        let saved = note_save(token.clone());
        assert!(saved.ok);
        assert_eq!(saved.notice.as_deref(), Some("Note saved!"));
        let note_id = saved.note_id.expect("saved note should return note_id");
        assert!(saved
            .items
            .iter()
            .any(|item| item.note_id == note_id && item.content == token));
        assert!(notes_list().items.iter().any(|item| item.note_id == note_id));

        let deleted = note_delete(note_id.clone());
        assert!(deleted.ok);
        assert_eq!(deleted.notice.as_deref(), Some("Note deleted"));
        assert!(!deleted.items.iter().any(|item| item.note_id == note_id));
    }

    #[test]
    fn note_delete_of_unknown_id_is_silent() {
        test_notes_dir();
        let response = note_delete("note_1.txt".to_string());
        assert!(!response.ok);
        assert_eq!(response.note_id, None);
        assert_eq!(response.notice, None);
    }
}
