//! # Exchange Types
//!
//! Shared entities for the Gift-Circle workspace.
//!
//! Every subsystem crate (engine, store, notify, runtime) exchanges data
//! through the records defined here. The types are plain data: identifiers
//! are opaque UUID newtypes assigned by the persistence layer, and nothing
//! in this crate performs I/O.

pub mod entities;
pub mod validation;

pub use entities::{
    Assignment, AssignmentSet, Event, EventId, NewEvent, NewParticipant, Participant,
    ParticipantId,
};
