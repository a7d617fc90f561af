//! Domain model for the note store.
//!
//! # Responsibility
//! - Define the note record shared by the controller, codec and presentation.
//! - Own identifier generation so ids stay unique across a session.
//!
//! # Invariants
//! - Every note is identified by a `NoteId` that is never reused.

pub mod note;
