//! StudyNote command-line front end.
//!
//! # Responsibility
//! - Parse startup flags and choose the persistence slot.
//! - Hydrate the note store and run the interactive session on stdin.

mod command;
mod session;

use clap::Parser;
use log::info;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use studynote_core::db::open_db;
use studynote_core::{
    core_version, default_log_level, init_logging, MemorySlot, NoteStore, PersistenceSlot,
    SqliteSlot,
};

#[derive(Parser, Debug)]
#[command(name = "studynote", version, about = "Keep study notes from the terminal")]
struct Args {
    /// SQLite file holding the notes slot.
    #[arg(long, default_value = "studynote.sqlite3")]
    db: PathBuf,
    /// Keep notes in memory only; nothing is saved on exit.
    #[arg(long, conflicts_with = "db")]
    memory: bool,
    /// One of trace|debug|info|warn|error.
    #[arg(long)]
    log_level: Option<String>,
    /// Absolute directory for rolling log files. Logging is off when omitted.
    #[arg(long)]
    log_dir: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("studynote: logging disabled: {err}");
        }
    }

    let slot: Box<dyn PersistenceSlot> = if args.memory {
        Box::new(MemorySlot::new())
    } else {
        match open_db(&args.db) {
            Ok(conn) => Box::new(SqliteSlot::new(conn)),
            Err(err) => {
                eprintln!("studynote: cannot open `{}`: {err}", args.db.display());
                return ExitCode::FAILURE;
            }
        }
    };

    info!(
        "event=cli_start module=cli status=ok version={} memory={}",
        core_version(),
        args.memory
    );
    let mut store = NoteStore::hydrate(slot);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match session::run_session(&mut store, stdin.lock(), &mut stdout) {
        Ok(()) => {
            info!(
                "event=cli_exit module=cli status=ok count={}",
                store.notes().len()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("studynote: terminal i/o failed: {err}");
            ExitCode::FAILURE
        }
    }
}
