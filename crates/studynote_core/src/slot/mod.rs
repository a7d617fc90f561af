//! Persistence slot contract and implementations.
//!
//! # Responsibility
//! - Define the get/set string storage the note store hydrates from and
//!   writes to.
//! - Provide in-memory and SQLite-backed slots.
//!
//! # Invariants
//! - `set` overwrites any prior value under the same key.
//! - `get` returns `Ok(None)` for keys never written.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemorySlot;
pub use sqlite::SqliteSlot;

/// Fixed key under which the serialized note list is stored.
pub const NOTES_STORAGE_KEY: &str = "student-notes";

pub type SlotResult<T> = Result<T, SlotError>;

/// Storage-layer failure while reading or writing a slot.
#[derive(Debug)]
pub enum SlotError {
    Sqlite(rusqlite::Error),
}

impl Display for SlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "slot storage failed: {err}"),
        }
    }
}

impl Error for SlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for SlotError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Synchronous key-value string storage.
pub trait PersistenceSlot {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> SlotResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> SlotResult<()>;
}

impl<S: PersistenceSlot + ?Sized> PersistenceSlot for &mut S {
    fn get(&self, key: &str) -> SlotResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> SlotResult<()> {
        (**self).set(key, value)
    }
}

impl<S: PersistenceSlot + ?Sized> PersistenceSlot for Box<S> {
    fn get(&self, key: &str) -> SlotResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> SlotResult<()> {
        (**self).set(key, value)
    }
}
