//! Inbound port: the engine's one entry point.

use exchange_types::{AssignmentSet, Participant};

use crate::domain::errors::AssignmentError;

/// Assignment generation API.
///
/// Synchronous and pure: implementations perform no I/O, never mutate the
/// caller's participant list, and either return a complete set that has
/// passed the validation pass or fail - never a partial result. Safe to
/// call concurrently for independent events.
pub trait AssignmentEngineApi: Send + Sync {
    /// Produces a randomized, validated giver -> receiver mapping.
    ///
    /// Fails with [`AssignmentError::InsufficientParticipants`] below the
    /// configured minimum and [`AssignmentError::MalformedParticipant`] for
    /// records missing a required field, both before any randomness is
    /// drawn. Invariant violations from the validation pass propagate
    /// unchanged.
    fn generate_assignments(
        &self,
        participants: &[Participant],
    ) -> Result<AssignmentSet, AssignmentError>;
}
