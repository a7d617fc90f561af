//! Note store controller.
//!
//! # Responsibility
//! - Hydrate the note list from a persistence slot on startup.
//! - Apply submit/edit/cancel/delete intents from the presentation layer.
//! - Persist the full note list once per mutating intent.
//!
//! # Invariants
//! - `notes` is newest-first; edits keep a note's position.
//! - Note ids are unique within the store.
//! - `DraftMode::Editing(id)` implies a note with `id` exists.
//! - Only submit and delete write to the slot; a blank submit does not.
//! - Create trims the draft; update stores it verbatim.

use crate::model::note::{Clock, Note, NoteId, NoteIdGenerator, SystemClock};
use crate::slot::{PersistenceSlot, NOTES_STORAGE_KEY};
use crate::store::codec::{decode_notes, encode_notes, DecodeError};
use crate::store::StoreResult;
use log::{debug, error, info, warn};

/// What the submit action currently targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftMode {
    /// Submitting creates a new note.
    #[default]
    Create,
    /// Submitting replaces the text of this note.
    Editing(NoteId),
}

/// Result of `NoteStore::submit_draft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Draft was blank, no id could be issued, or the edit target no
    /// longer exists.
    Ignored,
    /// A new note was prepended.
    Created(NoteId),
    /// An existing note's text was replaced.
    Updated(NoteId),
}

/// Single owner of note list and draft state.
pub struct NoteStore<S: PersistenceSlot, C: Clock = SystemClock> {
    slot: S,
    ids: NoteIdGenerator<C>,
    notes: Vec<Note>,
    draft_text: String,
    mode: DraftMode,
}

impl<S: PersistenceSlot> NoteStore<S, SystemClock> {
    /// Builds a store from whatever the slot holds, using wall-clock ids.
    pub fn hydrate(slot: S) -> Self {
        Self::hydrate_with_clock(slot, SystemClock)
    }
}

impl<S: PersistenceSlot, C: Clock> NoteStore<S, C> {
    /// Builds a store from the slot, issuing ids from `clock`.
    ///
    /// Never fails: an absent, blank, malformed or unreadable slot value
    /// yields an empty list. Draft and mode always start cleared.
    pub fn hydrate_with_clock(slot: S, clock: C) -> Self {
        let notes = load_notes(&slot);
        let mut ids = NoteIdGenerator::with_clock(clock);
        ids.observe(&notes);

        Self {
            slot,
            ids,
            notes,
            draft_text: String::new(),
            mode: DraftMode::Create,
        }
    }

    /// Notes in display order, newest first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    pub fn mode(&self) -> DraftMode {
        self.mode
    }

    pub fn editing_id(&self) -> Option<NoteId> {
        match self.mode {
            DraftMode::Create => None,
            DraftMode::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id().is_some()
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn into_slot(self) -> S {
        self.slot
    }

    /// Replaces the draft. No persistence.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft_text = text.into();
    }

    /// Commits the draft as a new note or as the edited note's new text.
    ///
    /// # Errors
    /// - Returns `StoreError` when the follow-up write fails. The in-memory
    ///   change is kept either way.
    pub fn submit_draft(&mut self) -> StoreResult<SubmitOutcome> {
        let trimmed = self.draft_text.trim();
        if trimmed.is_empty() {
            debug!("event=note_submit module=store status=ignored reason=blank_draft");
            return Ok(SubmitOutcome::Ignored);
        }

        let outcome = match self.mode {
            DraftMode::Create => {
                let Some(id) = self.ids.next_id() else {
                    error!("event=note_create module=store status=error error_code=id_unavailable");
                    return Ok(SubmitOutcome::Ignored);
                };
                let note = Note::new(id, trimmed);
                self.notes.insert(0, note);
                info!(
                    "event=note_create module=store status=ok note_id={id} count={}",
                    self.notes.len()
                );
                SubmitOutcome::Created(id)
            }
            DraftMode::Editing(id) => {
                let text = std::mem::take(&mut self.draft_text);
                match self.notes.iter_mut().find(|note| note.id == id) {
                    Some(note) => note.text = text,
                    None => {
                        // Unreachable while delete_note keeps the mode in sync.
                        error!(
                            "event=note_update module=store status=error error_code=edit_target_missing note_id={id}"
                        );
                        self.reset_draft();
                        return Ok(SubmitOutcome::Ignored);
                    }
                }
                info!("event=note_update module=store status=ok note_id={id}");
                SubmitOutcome::Updated(id)
            }
        };

        self.reset_draft();
        self.persist()?;
        Ok(outcome)
    }

    /// Loads `id`'s text into the draft and targets it for update.
    ///
    /// Returns `false` (and changes nothing) when `id` is unknown.
    pub fn begin_edit(&mut self, id: NoteId) -> bool {
        let Some(note) = self.note(id) else {
            debug!(
                "event=note_edit_begin module=store status=ignored reason=not_found note_id={id}"
            );
            return false;
        };

        let text = note.text.clone();
        self.draft_text = text;
        self.mode = DraftMode::Editing(id);
        debug!("event=note_edit_begin module=store status=ok note_id={id}");
        true
    }

    /// Abandons any edit and clears the draft. No persistence.
    pub fn cancel_edit(&mut self) {
        if let DraftMode::Editing(id) = self.mode {
            debug!("event=note_edit_cancel module=store status=ok note_id={id}");
        }
        self.reset_draft();
    }

    /// Removes the note with `id` and writes the resulting list.
    ///
    /// Deleting the note under edit also clears the draft. Returns
    /// `Ok(false)` when `id` is unknown; the list is still written, so a
    /// stale or corrupt slot value is replaced.
    pub fn delete_note(&mut self, id: NoteId) -> StoreResult<bool> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        let removed = self.notes.len() != before;

        if self.mode == DraftMode::Editing(id) {
            self.reset_draft();
            info!("event=note_edit_cancel module=store status=ok reason=note_deleted note_id={id}");
        }
        if removed {
            info!(
                "event=note_delete module=store status=ok note_id={id} count={}",
                self.notes.len()
            );
        } else {
            debug!("event=note_delete module=store status=ignored reason=not_found note_id={id}");
        }

        self.persist()?;
        Ok(removed)
    }

    fn reset_draft(&mut self) {
        self.draft_text.clear();
        self.mode = DraftMode::Create;
    }

    fn persist(&mut self) -> StoreResult<()> {
        let raw = encode_notes(&self.notes)?;
        if let Err(err) = self.slot.set(NOTES_STORAGE_KEY, &raw) {
            error!(
                "event=notes_persist module=store status=error error_code=slot_write_failed error={err}"
            );
            return Err(err.into());
        }
        debug!(
            "event=notes_persist module=store status=ok count={} bytes={}",
            self.notes.len(),
            raw.len()
        );
        Ok(())
    }
}

fn load_notes<S: PersistenceSlot>(slot: &S) -> Vec<Note> {
    let raw = match slot.get(NOTES_STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            info!("event=notes_hydrate module=store status=ok reason=absent count=0");
            return Vec::new();
        }
        Err(err) => {
            error!(
                "event=notes_hydrate module=store status=recovered error_code=slot_read_failed error={err}"
            );
            return Vec::new();
        }
    };

    match decode_notes(&raw) {
        Ok(notes) => {
            info!(
                "event=notes_hydrate module=store status=ok count={}",
                notes.len()
            );
            notes
        }
        Err(DecodeError::Blank) => {
            info!("event=notes_hydrate module=store status=ok reason=blank count=0");
            Vec::new()
        }
        Err(err @ DecodeError::Malformed(_)) => {
            warn!(
                "event=notes_hydrate module=store status=recovered error_code=corrupt_value bytes={} error={err}",
                raw.len()
            );
            Vec::new()
        }
    }
}
