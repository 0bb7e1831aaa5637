//! Error types for the persistence collaborator.

use exchange_types::{EventId, ParticipantId};
use thiserror::Error;

/// All errors the store can fail with.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No event under the given id.
    #[error("event {0} not found")]
    EventNotFound(EventId),

    /// An assignment names a giver that is not enrolled in the event.
    #[error("giver {giver} is not a participant of event {event}")]
    UnknownGiver {
        event: EventId,
        giver: ParticipantId,
    },

    /// The event name was blank.
    #[error("event name must not be empty")]
    MissingEventName,

    /// The organizer email failed the syntax check.
    #[error("organizer email is not a valid address: {0}")]
    InvalidOrganizerEmail(String),

    /// A participant name was blank.
    #[error("participant name must not be empty")]
    MissingName,

    /// A participant email failed the syntax check.
    #[error("not a valid email address: {0}")]
    InvalidEmail(String),

    /// Two participants of one event share an address (case-insensitive).
    #[error("duplicate email address within event: {0}")]
    DuplicateEmail(String),

    /// Enrollment was attempted with no participants at all.
    #[error("participant list must not be empty")]
    EmptyParticipantList,
}
