//! The event-creation workflow.
//!
//! One run takes a finalized submission through the whole pipeline:
//!
//! 1. save the event (store assigns its id)
//! 2. enroll the participants (store assigns their ids)
//! 3. draw the assignments (engine, validated before return)
//! 4. record one link per giver
//! 5. notify participants and organizer
//!
//! Engine invariant violations are defects, not user input: they are logged
//! at error level and propagated without a retry, since drawing again with
//! fresh randomness would only mask the bug.

use std::sync::Arc;

use exchange_engine::{AssignmentEngineApi, AssignmentError};
use exchange_notify::{DeliveryReport, NotificationService, NotifyError};
use exchange_store::{EventStoreApi, StoreError};
use exchange_types::{Event, NewEvent, NewParticipant};
use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

/// A complete organizer submission: the event plus its participant list.
#[derive(Clone, Debug, Deserialize)]
pub struct EventSubmission {
    /// Event details from the form.
    pub event: NewEvent,
    /// Participants from the form, in enrollment order.
    pub participants: Vec<NewParticipant>,
}

/// Everything a caller learns from one workflow run.
#[derive(Debug)]
pub struct WorkflowReport {
    /// The registered event.
    pub event: Event,
    /// How many participants were enrolled.
    pub participant_count: usize,
    /// Per-message delivery outcomes.
    pub delivery: DeliveryReport,
}

/// Failures of the event-creation workflow.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Persistence failure, including intake validation.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Assignment generation failed. For invariant violations the user-facing
    /// message is a generic "assignment generation failed, please retry";
    /// the underlying defect is preserved as the source.
    #[error("assignment generation failed: {0}")]
    Assignment(#[from] AssignmentError),

    /// Notification wiring failure (not per-message delivery problems,
    /// which are reported per message in the [`WorkflowReport`]).
    #[error("notification error: {0}")]
    Notify(#[from] NotifyError),
}

/// Orchestrates one event creation over the subsystem ports.
pub struct EventWorkflow {
    store: Arc<dyn EventStoreApi>,
    engine: Arc<dyn AssignmentEngineApi>,
    notifier: Arc<NotificationService>,
}

impl EventWorkflow {
    /// Workflow over the given collaborators.
    pub fn new(
        store: Arc<dyn EventStoreApi>,
        engine: Arc<dyn AssignmentEngineApi>,
        notifier: Arc<NotificationService>,
    ) -> Self {
        Self {
            store,
            engine,
            notifier,
        }
    }

    /// Runs the full pipeline for one submission.
    pub async fn run(&self, submission: EventSubmission) -> Result<WorkflowReport, WorkflowError> {
        let event = self.store.save_event(submission.event).await?;
        info!(event_id = %event.id, name = %event.name, "Event registered");

        let participants = self
            .store
            .save_participants(event.id, submission.participants)
            .await?;

        let assignments = self
            .engine
            .generate_assignments(&participants)
            .map_err(|err| {
                if matches!(
                    err,
                    AssignmentError::SelfAssignment { .. }
                        | AssignmentError::IncompleteCoverage { .. }
                        | AssignmentError::UnknownParticipant { .. }
                ) {
                    error!(event_id = %event.id, error = %err, "Engine invariant violation");
                }
                err
            })?;

        self.store
            .record_assignments(event.id, &assignments)
            .await?;

        let delivery = self
            .notifier
            .notify_event(&event, &participants, &assignments)
            .await?;

        info!(
            event_id = %event.id,
            participant_count = participants.len(),
            delivered = delivery.successful,
            failed = delivery.failed,
            "Event workflow complete"
        );

        Ok(WorkflowReport {
            event,
            participant_count: participants.len(),
            delivery,
        })
    }
}
