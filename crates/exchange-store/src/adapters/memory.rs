//! In-memory store adapter.
//!
//! Keeps everything in `tokio::sync::RwLock`-guarded maps. The assignment
//! link is stored beside the participant rows as a giver -> receiver map,
//! one entry per giver, mirroring how a relational row would carry an
//! `assigned_to` column.

use std::collections::HashMap;

use async_trait::async_trait;
use exchange_types::{
    validation, Assignment, AssignmentSet, Event, EventId, NewEvent, NewParticipant, Participant,
    ParticipantId,
};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::errors::StoreError;
use crate::ports::inbound::EventStoreApi;

struct EventRecord {
    event: Event,
    participants: Vec<Participant>,
    /// giver -> receiver links; complete when every participant appears.
    links: HashMap<ParticipantId, ParticipantId>,
}

/// In-memory implementation of [`EventStoreApi`].
#[derive(Default)]
pub struct InMemoryEventStore {
    events: RwLock<HashMap<EventId, EventRecord>>,
}

impl InMemoryEventStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventStoreApi for InMemoryEventStore {
    async fn save_event(&self, event: NewEvent) -> Result<Event, StoreError> {
        if event.name.trim().is_empty() {
            return Err(StoreError::MissingEventName);
        }
        if !validation::is_valid_email(event.organizer_email.trim()) {
            return Err(StoreError::InvalidOrganizerEmail(event.organizer_email));
        }

        let saved = Event {
            id: EventId::generate(),
            name: event.name.trim().to_owned(),
            exchange_date: event.exchange_date,
            budget: event.budget,
            organizer_email: event.organizer_email.trim().to_owned(),
        };

        let mut events = self.events.write().await;
        events.insert(
            saved.id,
            EventRecord {
                event: saved.clone(),
                participants: Vec::new(),
                links: HashMap::new(),
            },
        );

        info!(event_id = %saved.id, name = %saved.name, "Event saved");
        Ok(saved)
    }

    async fn save_participants(
        &self,
        event_id: EventId,
        participants: Vec<NewParticipant>,
    ) -> Result<Vec<Participant>, StoreError> {
        if participants.is_empty() {
            return Err(StoreError::EmptyParticipantList);
        }

        let mut events = self.events.write().await;
        let record = events
            .get_mut(&event_id)
            .ok_or(StoreError::EventNotFound(event_id))?;

        // Validate the whole batch before touching the record; enrollment
        // is all-or-nothing.
        let mut seen = std::collections::HashSet::new();
        for p in &record.participants {
            seen.insert(validation::normalize_email(&p.email));
        }
        for p in &participants {
            if p.name.trim().is_empty() {
                return Err(StoreError::MissingName);
            }
            if !validation::is_valid_email(p.email.trim()) {
                return Err(StoreError::InvalidEmail(p.email.clone()));
            }
            if !seen.insert(validation::normalize_email(&p.email)) {
                return Err(StoreError::DuplicateEmail(p.email.clone()));
            }
        }

        let saved: Vec<Participant> = participants
            .into_iter()
            .map(|p| Participant {
                id: ParticipantId::generate(),
                event_id,
                name: p.name.trim().to_owned(),
                email: p.email.trim().to_owned(),
                wish_note: validation::normalize_note(p.wish_note.as_deref()),
            })
            .collect();

        record.participants.extend(saved.iter().cloned());

        info!(
            event_id = %event_id,
            participant_count = saved.len(),
            "Participants saved"
        );
        Ok(saved)
    }

    async fn record_assignments(
        &self,
        event_id: EventId,
        assignments: &AssignmentSet,
    ) -> Result<(), StoreError> {
        let mut events = self.events.write().await;
        let record = events
            .get_mut(&event_id)
            .ok_or(StoreError::EventNotFound(event_id))?;

        for assignment in assignments {
            if !record.participants.iter().any(|p| p.id == assignment.giver) {
                return Err(StoreError::UnknownGiver {
                    event: event_id,
                    giver: assignment.giver,
                });
            }
        }

        for assignment in assignments {
            record.links.insert(assignment.giver, assignment.receiver);
            debug!(
                event_id = %event_id,
                giver = %assignment.giver,
                "Assignment link recorded"
            );
        }

        info!(
            event_id = %event_id,
            link_count = assignments.len(),
            "Assignments recorded"
        );
        Ok(())
    }

    async fn event(&self, event_id: EventId) -> Result<Event, StoreError> {
        let events = self.events.read().await;
        events
            .get(&event_id)
            .map(|r| r.event.clone())
            .ok_or(StoreError::EventNotFound(event_id))
    }

    async fn participants(&self, event_id: EventId) -> Result<Vec<Participant>, StoreError> {
        let events = self.events.read().await;
        events
            .get(&event_id)
            .map(|r| r.participants.clone())
            .ok_or(StoreError::EventNotFound(event_id))
    }

    async fn assignments(&self, event_id: EventId) -> Result<AssignmentSet, StoreError> {
        let events = self.events.read().await;
        let record = events
            .get(&event_id)
            .ok_or(StoreError::EventNotFound(event_id))?;

        // Rebuild the denormalized receiver fields from the participant rows;
        // the map holds ids only.
        let assignments = record
            .participants
            .iter()
            .filter_map(|giver| {
                let receiver_id = record.links.get(&giver.id)?;
                let receiver = record.participants.iter().find(|p| p.id == *receiver_id)?;
                Some(Assignment {
                    giver: giver.id,
                    receiver: receiver.id,
                    receiver_name: receiver.name.clone(),
                    receiver_wish_note: receiver.wish_note.clone(),
                })
            })
            .collect();

        Ok(AssignmentSet::new(assignments))
    }

    async fn assignments_complete(&self, event_id: EventId) -> Result<bool, StoreError> {
        let events = self.events.read().await;
        let record = events
            .get(&event_id)
            .ok_or(StoreError::EventNotFound(event_id))?;

        Ok(!record.participants.is_empty()
            && record
                .participants
                .iter()
                .all(|p| record.links.contains_key(&p.id)))
    }
}
