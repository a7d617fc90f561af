//! Note store controller and its persisted wire format.
//!
//! # Responsibility
//! - Own the authoritative note list and the transient draft state.
//! - Write the full note list to the persistence slot after every mutation.
//!
//! # Invariants
//! - Notes are ordered newest-first.
//! - An edit target always refers to a note present in the list.

pub mod codec;
pub mod note_store;

use crate::slot::SlotError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure to persist the note list after a mutation.
///
/// The in-memory mutation has already been applied when this is returned.
#[derive(Debug)]
pub enum StoreError {
    /// Note list could not be serialized.
    Encode(serde_json::Error),
    /// Slot rejected the write.
    Slot(SlotError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "failed to encode notes: {err}"),
            Self::Slot(err) => write!(f, "failed to persist notes: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) => Some(err),
            Self::Slot(err) => Some(err),
        }
    }
}

impl From<SlotError> for StoreError {
    fn from(value: SlotError) -> Self {
        Self::Slot(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}
