//! Ring pairing: each participant gives to their circular successor.
//!
//! After the list has been shuffled, position `k` gives to position
//! `(k + 1) mod N`. Because the successor of an index is never the index
//! itself for N >= 2, the construction cannot produce a self-assignment,
//! and following the chain visits every participant exactly once before
//! closing: a single N-cycle. This is deliberately stronger than a generic
//! derangement; multi-cycle derangements are never produced.

use exchange_types::{Assignment, AssignmentSet, Participant};

/// Builds the assignment set for an already-shuffled participant order.
///
/// Receiver display fields are denormalized onto each assignment so the
/// notification layer can render a message without a second lookup.
pub fn build_gift_ring(shuffled: &[&Participant]) -> AssignmentSet {
    let n = shuffled.len();
    let assignments = shuffled
        .iter()
        .enumerate()
        .map(|(k, giver)| {
            let receiver = shuffled[(k + 1) % n];
            Assignment {
                giver: giver.id,
                receiver: receiver.id,
                receiver_name: receiver.name.clone(),
                receiver_wish_note: receiver.wish_note.clone(),
            }
        })
        .collect();
    AssignmentSet::new(assignments)
}
