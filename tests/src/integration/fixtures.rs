//! Shared fixtures for the integration flows.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::Mutex;

use exchange_engine::AssignmentEngine;
use exchange_notify::{EmailMessage, EmailProvider, NotificationService, ProviderError};
use exchange_runtime::{EventSubmission, EventWorkflow};
use exchange_store::InMemoryEventStore;
use exchange_types::{NewEvent, NewParticipant};

/// Provider double that accepts every message and records it.
#[derive(Default)]
pub struct RecordingProvider {
    sent: Mutex<Vec<EmailMessage>>,
    /// Addresses whose sends should fail with a rate-limit error.
    pub fail_for: Vec<String>,
}

impl RecordingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(addresses: &[&str]) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_for: addresses.iter().map(|a| (*a).to_owned()).collect(),
        }
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl EmailProvider for RecordingProvider {
    async fn send(&self, message: &EmailMessage) -> Result<String, ProviderError> {
        if self.fail_for.contains(&message.to) {
            return Err(ProviderError::RateLimited);
        }
        self.sent.lock().push(message.clone());
        Ok(format!("msg-{}", self.sent.lock().len()))
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// A submission with `n` well-formed participants.
pub fn submission(n: usize) -> EventSubmission {
    EventSubmission {
        event: NewEvent {
            name: "Office Party".to_owned(),
            exchange_date: NaiveDate::from_ymd_opt(2026, 12, 24).expect("valid date"),
            budget: Some(25.0),
            organizer_email: "organizer@example.com".to_owned(),
        },
        participants: (1..=n)
            .map(|k| NewParticipant {
                name: format!("Person{k}"),
                email: format!("person{k}@example.com"),
                wish_note: if k % 2 == 0 {
                    Some(format!("wish list {k}"))
                } else {
                    None
                },
            })
            .collect(),
    }
}

/// Full workflow over an in-memory store, a seeded engine, and the given
/// provider double.
pub fn workflow_with(
    store: Arc<InMemoryEventStore>,
    provider: Arc<RecordingProvider>,
    seed: u64,
) -> EventWorkflow {
    EventWorkflow::new(
        store,
        Arc::new(AssignmentEngine::seeded(seed)),
        Arc::new(NotificationService::new(provider)),
    )
}
