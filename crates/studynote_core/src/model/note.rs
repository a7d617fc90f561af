//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical `Note` record persisted in the notes slot.
//! - Issue fresh note ids from an injectable clock.
//!
//! # Invariants
//! - `id` is assigned at creation time and never changes afterwards.
//! - Ids issued by one `NoteIdGenerator` never repeat an issued or observed id.

use log::{error, warn};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Stable note identifier, derived from epoch milliseconds at creation.
///
/// Serialized as a plain JSON number to match the persisted slot format.
pub type NoteId = i64;

/// One user-authored note.
///
/// Serialized shape is exactly `{"id": <number>, "text": <string>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub text: String,
}

impl Note {
    pub fn new(id: NoteId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}

/// Time source for id generation.
pub trait Clock {
    /// Current Unix epoch time in milliseconds.
    fn now_millis(&self) -> i64;
}

/// Wall-clock implementation backed by `SystemTime`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        // A clock set before 1970 degrades to 0; the generator still bumps
        // past the last issued id.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
            .unwrap_or(0)
    }
}

/// Issues note ids from a clock.
///
/// Each id is `max(now_millis, highest + 1)`, so ids stay unique when several
/// notes are created within one millisecond or the clock steps back. Once the
/// highest id is `i64::MAX`, ids count down from the lowest id instead.
#[derive(Debug, Clone)]
pub struct NoteIdGenerator<C: Clock = SystemClock> {
    clock: C,
    /// Lowest and highest id issued or observed so far.
    bounds: Option<(NoteId, NoteId)>,
}

impl NoteIdGenerator<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for NoteIdGenerator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> NoteIdGenerator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            bounds: None,
        }
    }

    /// Widens the known id range to cover every id in `notes`.
    ///
    /// Called after hydration, since persisted ids may come from a clock that
    /// was ahead of the current one.
    pub fn observe<'a>(&mut self, notes: impl IntoIterator<Item = &'a Note>) {
        for note in notes {
            self.record(note.id);
        }
    }

    /// Returns an id outside every id issued or observed so far.
    ///
    /// Returns `None` only when both `i64::MIN` and `i64::MAX` are taken.
    pub fn next_id(&mut self) -> Option<NoteId> {
        let now = self.clock.now_millis();
        let id = match self.bounds {
            None => now,
            Some((_, highest)) if now > highest => now,
            Some((lowest, highest)) => match highest.checked_add(1) {
                Some(id) => id,
                None => {
                    let Some(id) = lowest.checked_sub(1) else {
                        error!(
                            "event=note_id_issue module=model status=error error_code=id_space_exhausted"
                        );
                        return None;
                    };
                    warn!(
                        "event=note_id_issue module=model status=degraded reason=max_id_reached note_id={id}"
                    );
                    id
                }
            },
        };
        self.record(id);
        Some(id)
    }

    fn record(&mut self, id: NoteId) {
        self.bounds = Some(match self.bounds {
            Some((lowest, highest)) => (lowest.min(id), highest.max(id)),
            None => (id, id),
        });
    }
}
