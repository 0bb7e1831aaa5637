//! Inbound port: the persistence contract the workflow relies on.

use async_trait::async_trait;
use exchange_types::{
    AssignmentSet, Event, EventId, NewEvent, NewParticipant, Participant,
};

use crate::domain::errors::StoreError;

/// Event/participant/assignment store.
///
/// Identifier generation lives here: the engine assumes ids are already
/// assigned before it is invoked, so `save_participants` is where a
/// participant first receives one.
#[async_trait]
pub trait EventStoreApi: Send + Sync {
    /// Registers a new event, assigning its id.
    async fn save_event(&self, event: NewEvent) -> Result<Event, StoreError>;

    /// Enrolls participants into an event, assigning their ids.
    ///
    /// Enforces the intake rules: non-empty names, syntactically valid
    /// emails, case-insensitive email uniqueness within the event, blank
    /// wish notes normalized away.
    async fn save_participants(
        &self,
        event_id: EventId,
        participants: Vec<NewParticipant>,
    ) -> Result<Vec<Participant>, StoreError>;

    /// Stores one assignment link per giver (giver -> receiver id).
    async fn record_assignments(
        &self,
        event_id: EventId,
        assignments: &AssignmentSet,
    ) -> Result<(), StoreError>;

    /// Fetches an event by id.
    async fn event(&self, event_id: EventId) -> Result<Event, StoreError>;

    /// Fetches the participants of an event in enrollment order.
    async fn participants(&self, event_id: EventId) -> Result<Vec<Participant>, StoreError>;

    /// Fetches the recorded assignments, one per giver in enrollment order.
    /// Empty until [`record_assignments`](Self::record_assignments) runs.
    async fn assignments(&self, event_id: EventId) -> Result<AssignmentSet, StoreError>;

    /// True when every participant of the event has an assignment link.
    async fn assignments_complete(&self, event_id: EventId) -> Result<bool, StoreError>;
}
