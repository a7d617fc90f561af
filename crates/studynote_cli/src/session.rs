//! Interactive session: render store state, dispatch intents.
//!
//! # Responsibility
//! - Render the note list, the draft and the available actions.
//! - Forward parsed intents to `NoteStore` and report outcomes.
//!
//! # Invariants
//! - Each command line maps to at most one store intent (`add` sets the
//!   draft, then submits).
//! - Persistence failures are reported and the session keeps running.

use crate::command::{parse_command, Command, HELP_TEXT};
use log::warn;
use std::io::{self, BufRead, Write};
use studynote_core::{Clock, NoteStore, PersistenceSlot, StoreError, SubmitOutcome};

const EMPTY_LIST_TEXT: &str = "No notes saved yet.";

/// Whether the loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Reads commands from `input` until EOF or `quit`.
pub fn run_session<S, C, R, W>(
    store: &mut NoteStore<S, C>,
    input: R,
    out: &mut W,
) -> io::Result<()>
where
    S: PersistenceSlot,
    C: Clock,
    R: BufRead,
    W: Write,
{
    render(store, out)?;
    prompt(out)?;
    for line in input.lines() {
        let line = line?;
        if execute_line(store, &line, out)? == Flow::Quit {
            break;
        }
        prompt(out)?;
    }
    Ok(())
}

/// Applies one input line and writes the resulting view.
pub fn execute_line<S, C, W>(
    store: &mut NoteStore<S, C>,
    line: &str,
    out: &mut W,
) -> io::Result<Flow>
where
    S: PersistenceSlot,
    C: Clock,
    W: Write,
{
    let command = match parse_command(line) {
        Ok(command) => command,
        Err(err) => {
            writeln!(out, "{err}")?;
            return Ok(Flow::Continue);
        }
    };

    match command {
        Command::Empty => {}
        Command::List => render_notes(store, out)?,
        Command::Show => render_draft(store, out)?,
        Command::Help => writeln!(out, "{HELP_TEXT}")?,
        Command::Quit => return Ok(Flow::Quit),
        Command::Type(text) => {
            store.set_draft(text);
            render_draft(store, out)?;
        }
        Command::Add(text) => {
            store.set_draft(text);
            submit(store, out)?;
        }
        Command::Submit => submit(store, out)?,
        Command::Edit(id) => {
            if store.begin_edit(id) {
                writeln!(out, "Editing note {id}.")?;
                render_draft(store, out)?;
            } else {
                writeln!(out, "No note with id {id}.")?;
            }
        }
        Command::Cancel => {
            store.cancel_edit();
            render_draft(store, out)?;
        }
        Command::Delete(id) => match store.delete_note(id) {
            Ok(true) => {
                writeln!(out, "Deleted note {id}.")?;
                render(store, out)?;
            }
            Ok(false) => writeln!(out, "No note with id {id}.")?,
            Err(err) => report_store_error(&err, out)?,
        },
    }

    Ok(Flow::Continue)
}

fn submit<S, C, W>(store: &mut NoteStore<S, C>, out: &mut W) -> io::Result<()>
where
    S: PersistenceSlot,
    C: Clock,
    W: Write,
{
    match store.submit_draft() {
        Ok(SubmitOutcome::Ignored) => writeln!(out, "Nothing to save; the draft is empty.")?,
        Ok(SubmitOutcome::Created(id)) => {
            writeln!(out, "Added note {id}.")?;
            render(store, out)?;
        }
        Ok(SubmitOutcome::Updated(id)) => {
            writeln!(out, "Updated note {id}.")?;
            render(store, out)?;
        }
        Err(err) => report_store_error(&err, out)?,
    }
    Ok(())
}

fn report_store_error<W: Write>(err: &StoreError, out: &mut W) -> io::Result<()> {
    warn!("event=cli_persist module=cli status=error error={err}");
    writeln!(out, "Warning: change kept in this session but not saved ({err}).")
}

/// Writes the full view: list, draft and actions.
pub fn render<S, C, W>(store: &NoteStore<S, C>, out: &mut W) -> io::Result<()>
where
    S: PersistenceSlot,
    C: Clock,
    W: Write,
{
    render_notes(store, out)?;
    render_draft(store, out)
}

fn render_notes<S, C, W>(store: &NoteStore<S, C>, out: &mut W) -> io::Result<()>
where
    S: PersistenceSlot,
    C: Clock,
    W: Write,
{
    writeln!(out, "All Notes")?;
    if store.notes().is_empty() {
        return writeln!(out, "  {EMPTY_LIST_TEXT}");
    }
    for note in store.notes() {
        let marker = if store.editing_id() == Some(note.id) {
            '*'
        } else {
            ' '
        };
        writeln!(out, "{marker} [{}] {}", note.id, note.text)?;
    }
    Ok(())
}

fn render_draft<S, C, W>(store: &NoteStore<S, C>, out: &mut W) -> io::Result<()>
where
    S: PersistenceSlot,
    C: Clock,
    W: Write,
{
    writeln!(out, "Draft: {:?}", store.draft_text())?;
    if store.is_editing() {
        writeln!(out, "Actions: [Update Note] [Cancel]")
    } else {
        writeln!(out, "Actions: [Add Note]")
    }
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
