//! Notification service.
//!
//! Renders and sends one assignment notice per participant plus one
//! organizer summary through whichever provider was configured, and
//! collects per-message outcomes without short-circuiting: a bounced
//! address must not keep the rest of the circle uninformed.

use std::sync::Arc;

use exchange_types::{AssignmentSet, Event, Participant};
use tracing::{info, warn};

use crate::domain::entities::{DeliveryOutcome, DeliveryReport};
use crate::domain::errors::NotifyError;
use crate::ports::outbound::EmailProvider;
use crate::templates;

/// Sends the notices for one event through a pluggable provider.
pub struct NotificationService {
    provider: Arc<dyn EmailProvider>,
}

impl NotificationService {
    /// Service over the given provider.
    pub fn new(provider: Arc<dyn EmailProvider>) -> Self {
        Self { provider }
    }

    /// Sends every participant their secret assignment, then the organizer
    /// a summary. Each message carries only its recipient's slice of the
    /// mapping; the full set never leaves this function.
    pub async fn notify_event(
        &self,
        event: &Event,
        participants: &[Participant],
        assignments: &AssignmentSet,
    ) -> Result<DeliveryReport, NotifyError> {
        // Render everything up front so a missing assignment is caught
        // before the first message goes out.
        let mut messages = Vec::with_capacity(participants.len() + 1);
        for participant in participants {
            let assignment = assignments
                .for_giver(participant.id)
                .ok_or(NotifyError::MissingAssignment(participant.id))?;
            messages.push(templates::assignment_notice(participant, assignment, event));
        }
        messages.push(templates::organizer_summary(event, participants.len()));

        info!(
            provider = self.provider.name(),
            message_count = messages.len(),
            event_id = %event.id,
            "Sending notifications"
        );

        let mut outcomes = Vec::with_capacity(messages.len());
        for message in &messages {
            let result = self.provider.send(message).await;
            if let Err(err) = &result {
                warn!(to = %message.to, error = %err, "Message delivery failed");
            }
            outcomes.push(DeliveryOutcome {
                to: message.to.clone(),
                result,
            });
        }

        let report = DeliveryReport::from_outcomes(outcomes);
        info!(
            successful = report.successful,
            failed = report.failed,
            total = report.total,
            "Notification run complete"
        );
        Ok(report)
    }
}
