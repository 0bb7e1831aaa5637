//! Error types for assignment generation.

use exchange_types::ParticipantId;
use thiserror::Error;

/// Side of a pairing, used when reporting coverage problems.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    /// The giving side of an assignment.
    Giver,
    /// The receiving side of an assignment.
    Receiver,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Giver => write!(f, "giver"),
            Self::Receiver => write!(f, "receiver"),
        }
    }
}

/// Required participant field found missing during the input check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticipantField {
    /// The opaque identifier assigned by the store.
    Identifier,
    /// The display name.
    Name,
    /// The contact address.
    Email,
}

impl std::fmt::Display for ParticipantField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier => write!(f, "identifier"),
            Self::Name => write!(f, "name"),
            Self::Email => write!(f, "email"),
        }
    }
}

/// All errors the assignment engine can fail with.
///
/// The first two are caller-input problems caught before any shuffle. The
/// remaining three are invariant violations raised by the validation pass;
/// with a correct shuffle-plus-ring construction they are unreachable, so
/// seeing one means a defect in the engine itself, not bad user input. They
/// are propagated to the caller untouched and must never be papered over by
/// silently retrying with different randomness.
#[derive(Debug, Error)]
pub enum AssignmentError {
    /// Fewer participants than the configured minimum.
    #[error("need at least {min} participants, got {count}")]
    InsufficientParticipants { count: usize, min: usize },

    /// A participant record is missing a required field. Indicates a
    /// data-integrity bug in the calling layer.
    #[error("participant {id} is missing required field: {field}")]
    MalformedParticipant {
        id: ParticipantId,
        field: ParticipantField,
    },

    /// An assignment pairs a participant with themselves.
    #[error("participant {id} was assigned to themselves")]
    SelfAssignment { id: ParticipantId },

    /// A role does not cover every participant exactly once.
    #[error("incomplete {role} coverage: {actual} distinct of {expected} expected")]
    IncompleteCoverage {
        role: Role,
        expected: usize,
        actual: usize,
    },

    /// An assignment references an id outside the participant list.
    #[error("unknown participant {id} appeared as {role}")]
    UnknownParticipant { id: ParticipantId, role: Role },
}
