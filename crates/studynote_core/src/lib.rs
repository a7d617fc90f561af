//! Core note store for StudyNote.
//! This crate owns note state, its persistence slot and the invariants the
//! presentation layer relies on.

pub mod db;
pub mod logging;
pub mod model;
pub mod slot;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Clock, Note, NoteId, NoteIdGenerator, SystemClock};
pub use slot::{MemorySlot, PersistenceSlot, SlotError, SlotResult, SqliteSlot, NOTES_STORAGE_KEY};
pub use store::note_store::{DraftMode, NoteStore, SubmitOutcome};
pub use store::{StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
