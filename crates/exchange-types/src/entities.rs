//! Core entities shared across the Gift-Circle subsystems.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a gift-exchange event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub Uuid);

impl EventId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns true for the all-zero placeholder id.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Opaque identifier of a participant, unique and stable for its event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub Uuid);

impl ParticipantId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns true for the all-zero placeholder id.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Event details as submitted by the organizer, before an id is assigned.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewEvent {
    /// Display name of the event.
    pub name: String,
    /// Date the gifts are exchanged.
    pub exchange_date: NaiveDate,
    /// Optional suggested budget ceiling.
    pub budget: Option<f64>,
    /// Contact address of the organizer.
    pub organizer_email: String,
}

/// A registered gift-exchange event.
///
/// Created once at submission time and never mutated by the assignment
/// engine; the engine consumes it only as context for notifications.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Event {
    /// Store-assigned identifier.
    pub id: EventId,
    /// Display name of the event.
    pub name: String,
    /// Date the gifts are exchanged.
    pub exchange_date: NaiveDate,
    /// Optional suggested budget ceiling.
    pub budget: Option<f64>,
    /// Contact address of the organizer.
    pub organizer_email: String,
}

/// Participant details as submitted on the enrollment form.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewParticipant {
    /// Display name.
    pub name: String,
    /// Contact address; unique within the event, compared case-insensitively.
    pub email: String,
    /// Optional free-text gift wishes.
    pub wish_note: Option<String>,
}

/// An enrolled participant.
///
/// Immutable after creation; the assignment link is held by the store,
/// not on this record.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Participant {
    /// Store-assigned identifier, stable for the event.
    pub id: ParticipantId,
    /// Event this participant belongs to.
    pub event_id: EventId,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Optional free-text gift wishes.
    pub wish_note: Option<String>,
}

/// One giver -> receiver pairing.
///
/// Carries the receiver's display fields denormalized so a notification can
/// be rendered without another store lookup.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Assignment {
    /// Who buys the gift.
    pub giver: ParticipantId,
    /// Who receives it. Never equal to `giver`.
    pub receiver: ParticipantId,
    /// Receiver's display name.
    pub receiver_name: String,
    /// Receiver's wish note, if any.
    pub receiver_wish_note: Option<String>,
}

/// The complete set of assignments for one event.
///
/// For a participant list of size N >= 3 a valid set is a permutation of the
/// participant ids with no fixed points: every id appears exactly once as a
/// giver and exactly once as a receiver, and no entry pairs an id with
/// itself. The ring construction used by the engine additionally guarantees
/// a single N-cycle. Order matches the shuffled giver sequence; it is stable
/// for logging but carries no other meaning.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AssignmentSet {
    assignments: Vec<Assignment>,
}

impl AssignmentSet {
    /// Wraps a list of assignments. No validation happens here; the engine's
    /// validation pass certifies the invariants before a set is handed out.
    pub fn new(assignments: Vec<Assignment>) -> Self {
        Self { assignments }
    }

    /// Number of assignments (one per giver).
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// True when the set holds no assignments.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Iterates the assignments in giver order.
    pub fn iter(&self) -> std::slice::Iter<'_, Assignment> {
        self.assignments.iter()
    }

    /// Looks up the assignment where `giver` is the giving side.
    pub fn for_giver(&self, giver: ParticipantId) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.giver == giver)
    }

    /// The receiver assigned to `giver`, if any.
    pub fn receiver_of(&self, giver: ParticipantId) -> Option<ParticipantId> {
        self.for_giver(giver).map(|a| a.receiver)
    }
}

impl<'a> IntoIterator for &'a AssignmentSet {
    type Item = &'a Assignment;
    type IntoIter = std::slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.iter()
    }
}
