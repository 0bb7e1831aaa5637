//! Invariant checks certifying an assignment set before anyone trusts it.
//!
//! Four checks, in order:
//!
//! 1. no self-assignment
//! 2. giver coverage: every participant gives exactly once
//! 3. receiver coverage: every participant receives exactly once
//! 4. closed universe: no id outside the participant list
//!
//! [`validate`] fails fast on the first violation in that order; that is the
//! behavior the engine relies on. [`violations`] runs every check eagerly
//! and returns the full diagnostic list, which test suites use when they
//! want more than the first failure.

use std::collections::HashSet;

use exchange_types::{AssignmentSet, Participant, ParticipantId};

use super::errors::{AssignmentError, Role};

/// Certifies `set` against `participants`, failing fast on the first
/// violation. Idempotent: a set that passed once will pass again.
pub fn validate(set: &AssignmentSet, participants: &[Participant]) -> Result<(), AssignmentError> {
    check_no_self_assignment(set)?;
    check_coverage(set, participants.len(), Role::Giver)?;
    check_coverage(set, participants.len(), Role::Receiver)?;
    check_closed_universe(set, participants)?;
    Ok(())
}

/// Runs all four checks eagerly and collects every violation found.
pub fn violations(set: &AssignmentSet, participants: &[Participant]) -> Vec<AssignmentError> {
    let mut found = Vec::new();
    if let Err(err) = check_no_self_assignment(set) {
        found.push(err);
    }
    if let Err(err) = check_coverage(set, participants.len(), Role::Giver) {
        found.push(err);
    }
    if let Err(err) = check_coverage(set, participants.len(), Role::Receiver) {
        found.push(err);
    }
    if let Err(err) = check_closed_universe(set, participants) {
        found.push(err);
    }
    found
}

/// Check 1: no entry may pair an id with itself.
fn check_no_self_assignment(set: &AssignmentSet) -> Result<(), AssignmentError> {
    for assignment in set {
        if assignment.giver == assignment.receiver {
            return Err(AssignmentError::SelfAssignment {
                id: assignment.giver,
            });
        }
    }
    Ok(())
}

/// Checks 2 and 3: the distinct ids on one side must number exactly the
/// participant count. Duplicates shrink the distinct count, so a shortfall
/// covers both "someone missing" and "someone twice".
fn check_coverage(
    set: &AssignmentSet,
    expected: usize,
    role: Role,
) -> Result<(), AssignmentError> {
    let distinct: HashSet<ParticipantId> = set
        .iter()
        .map(|a| match role {
            Role::Giver => a.giver,
            Role::Receiver => a.receiver,
        })
        .collect();

    // A set longer than the participant list also fails here: it must then
    // either duplicate an id (distinct < len) or leave the universe (check 4).
    if distinct.len() != expected || set.len() != expected {
        return Err(AssignmentError::IncompleteCoverage {
            role,
            expected,
            actual: distinct.len(),
        });
    }
    Ok(())
}

/// Check 4: every id in the set must belong to the known participants.
fn check_closed_universe(
    set: &AssignmentSet,
    participants: &[Participant],
) -> Result<(), AssignmentError> {
    let known: HashSet<ParticipantId> = participants.iter().map(|p| p.id).collect();
    for assignment in set {
        if !known.contains(&assignment.giver) {
            return Err(AssignmentError::UnknownParticipant {
                id: assignment.giver,
                role: Role::Giver,
            });
        }
        if !known.contains(&assignment.receiver) {
            return Err(AssignmentError::UnknownParticipant {
                id: assignment.receiver,
                role: Role::Receiver,
            });
        }
    }
    Ok(())
}
