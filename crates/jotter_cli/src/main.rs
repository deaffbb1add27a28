//! CLI entry point for the Jotter note store.
//!
//! # Responsibility
//! - Drive list/save/delete against the same directory layout the app uses.
//! - Print the same notices the app shows; failures exit non-zero.

use clap::{Parser, Subcommand};
use jotter_core::{Clock, FsNoteRepository, NoteNotice, NoteService, StoreConfig};
use std::io::{self, Write};
use std::process::ExitCode;

/// Jotter - file-backed notes from the terminal
#[derive(Parser, Debug)]
#[command(name = "jotter", version, about = "File-backed notes from the terminal")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Notes directory (defaults to $JOTTER_NOTES_DIR, then the temp dir)
    #[arg(long, global = true, value_name = "PATH")]
    notes_dir: Option<String>,

    /// Write rolling logs to this absolute directory
    #[arg(long, global = true, value_name = "PATH")]
    log_dir: Option<String>,

    /// Log level used with --log-dir
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List saved notes, newest first
    List,
    /// Save a new note from the given words
    Save {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Delete a note by id (`note_<millis>.txt`)
    Delete { note_id: String },
    /// Check core linkage
    Ping,
    /// Print core version
    Version,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = args
            .log_level
            .as_deref()
            .unwrap_or(jotter_core::default_log_level());
        if let Err(err) = jotter_core::init_logging(level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let config = StoreConfig::resolve(args.notes_dir.as_deref());
    let service = NoteService::new(config.open_repository());
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    match run(args.command, &service, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("output failed: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Executes one subcommand. Success output goes to `out`, failure notices to
/// `err`; validation and I/O failures exit with `FAILURE`.
fn run<C: Clock>(
    command: Command,
    service: &NoteService<FsNoteRepository, C>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<ExitCode> {
    match command {
        Command::List => {
            for note in service.list_notes() {
                let first_line = note.content.lines().next().unwrap_or_default();
                writeln!(out, "{}\t{}", note.id, first_line)?;
            }
        }
        Command::Save { text } => match service.save_note(text.join(" ")) {
            Ok(note) => writeln!(out, "{} {}", NoteNotice::Saved, note.id)?,
            Err(failure) => {
                writeln!(err, "{}: {failure}", failure.notice())?;
                return Ok(ExitCode::FAILURE);
            }
        },
        Command::Delete { note_id } => {
            if let Some(notice) = service.delete_note(&note_id).notice() {
                writeln!(out, "{notice}")?;
            }
        }
        Command::Ping => writeln!(out, "jotter_core ping={}", jotter_core::ping())?,
        Command::Version => writeln!(out, "jotter_core version={}", jotter_core::core_version())?,
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::{run, Command};
    use jotter_core::{Clock, FsNoteRepository, NoteService};
    use std::process::ExitCode;

    struct FixedClock(u64);

    impl Clock for FixedClock {
        fn now_epoch_ms(&self) -> u64 {
            self.0
        }
    }

    fn run_captured<C: Clock>(
        command: Command,
        service: &NoteService<FsNoteRepository, C>,
    ) -> (ExitCode, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(command, service, &mut out, &mut err).unwrap();
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn blank_save_fails_with_notice_on_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let service = NoteService::with_clock(FsNoteRepository::new(dir.path()), FixedClock(5));

        let (code, out, err) = run_captured(
            Command::Save {
                text: vec!["  ".into()],
            },
            &service,
        );
        assert_eq!(code, ExitCode::FAILURE);
        assert!(out.is_empty());
        assert!(err.starts_with("Note cannot be empty"));
        assert!(service.list_notes().is_empty());
    }

    #[test]
    fn save_then_list_prints_id_and_first_line() {
        let dir = tempfile::tempdir().unwrap();
        let service = NoteService::with_clock(
            FsNoteRepository::new(dir.path()),
            FixedClock(1_700_000_000_000),
        );

        let (code, out, err) = run_captured(
            Command::Save {
                text: vec!["hello".into(), "world\nsecond line".into()],
            },
            &service,
        );
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(out, "Note saved! note_1700000000000.txt\n");
        assert!(err.is_empty());

        let (code, out, _) = run_captured(Command::List, &service);
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(out, "note_1700000000000.txt\thello world\n");
    }

    #[test]
    fn delete_prints_notice_only_when_a_note_was_removed() {
        let dir = tempfile::tempdir().unwrap();
        let service = NoteService::with_clock(FsNoteRepository::new(dir.path()), FixedClock(9));
        service.save_note("gone soon").unwrap();

        let (code, out, err) = run_captured(
            Command::Delete {
                note_id: "note_1.txt".into(),
            },
            &service,
        );
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(out.is_empty() && err.is_empty());

        let (code, out, _) = run_captured(
            Command::Delete {
                note_id: "note_9.txt".into(),
            },
            &service,
        );
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(out, "Note deleted\n");
        assert!(service.list_notes().is_empty());
    }
}
