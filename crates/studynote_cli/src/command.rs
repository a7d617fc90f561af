//! Line-oriented intent parsing.
//!
//! # Responsibility
//! - Turn one line of user input into a store intent or a view request.
//!
//! # Invariants
//! - Parsing is pure; it never touches the store.
//! - Text arguments keep their inner whitespace so update semantics are
//!   observable from the prompt.

use std::fmt::{Display, Formatter};
use studynote_core::NoteId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Blank input line.
    Empty,
    List,
    Show,
    /// Replace the draft, like typing into the input field.
    Type(String),
    Submit,
    /// Shorthand for `type <text>` followed by `submit`.
    Add(String),
    Edit(NoteId),
    Cancel,
    Delete(NoteId),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidId(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCommand(name) => {
                write!(f, "unknown command `{name}`; type `help` for commands")
            }
            Self::MissingArgument(command) => write!(f, "`{command}` needs a note id"),
            Self::InvalidId(value) => write!(f, "`{value}` is not a note id"),
        }
    }
}

impl std::error::Error for ParseError {}

pub const HELP_TEXT: &str = "\
commands:
  list              show all notes
  show              show the current draft
  type <text>       replace the draft
  submit            add the draft, or update the note being edited
  add <text>        type and submit in one step
  edit <id>         load a note into the draft for editing
  cancel            abandon the current edit
  delete <id>       remove a note
  help              show this help
  quit              exit";

/// Parses one input line.
///
/// The command word is matched case-insensitively. Everything after the
/// first space is the argument; trailing newline characters are dropped.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let line = line.trim_end_matches(['\n', '\r']);
    let stripped = line.trim_start();
    if stripped.trim().is_empty() {
        return Ok(Command::Empty);
    }

    let (word, rest) = match stripped.split_once(' ') {
        Some((word, rest)) => (word, rest),
        None => (stripped, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "list" | "ls" => Ok(Command::List),
        "show" => Ok(Command::Show),
        "type" => Ok(Command::Type(rest.to_string())),
        "submit" => Ok(Command::Submit),
        "add" => Ok(Command::Add(rest.to_string())),
        "edit" => parse_id("edit", rest).map(Command::Edit),
        "cancel" => Ok(Command::Cancel),
        "delete" | "rm" => parse_id("delete", rest).map(Command::Delete),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        _ => Err(ParseError::UnknownCommand(word.to_string())),
    }
}

fn parse_id(command: &'static str, rest: &str) -> Result<NoteId, ParseError> {
    let value = rest.trim();
    if value.is_empty() {
        return Err(ParseError::MissingArgument(command));
    }
    value
        .parse::<NoteId>()
        .map_err(|_| ParseError::InvalidId(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command, ParseError};

    #[test]
    fn text_arguments_keep_inner_and_trailing_whitespace() {
        assert_eq!(
            parse_command("type  two spaces  \n").expect("type should parse"),
            Command::Type(" two spaces  ".to_string())
        );
        assert_eq!(
            parse_command("ADD buy milk").expect("add should parse"),
            Command::Add("buy milk".to_string())
        );
    }

    #[test]
    fn id_commands_require_numeric_ids() {
        assert_eq!(
            parse_command("edit 1700000000000").expect("edit should parse"),
            Command::Edit(1_700_000_000_000)
        );
        assert_eq!(
            parse_command("delete").expect_err("missing id must be rejected"),
            ParseError::MissingArgument("delete")
        );
        assert_eq!(
            parse_command("rm abc").expect_err("non-numeric id must be rejected"),
            ParseError::InvalidId("abc".to_string())
        );
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert_eq!(parse_command("   \r\n").expect("blank line should parse"), Command::Empty);
        assert!(matches!(
            parse_command("frobnicate now"),
            Err(ParseError::UnknownCommand(name)) if name == "frobnicate"
        ));
    }
}
