//! Entities of the notification domain.

use serde::{Deserialize, Serialize};

use super::errors::ProviderError;

/// One outgoing message, already rendered.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain-text body.
    pub body: String,
}

/// Result of delivering one message.
#[derive(Debug)]
pub struct DeliveryOutcome {
    /// Recipient address.
    pub to: String,
    /// Provider message id on success, the failure otherwise.
    pub result: Result<String, ProviderError>,
}

impl DeliveryOutcome {
    /// True when the provider accepted the message.
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

/// Summary of one notification run.
#[derive(Debug, Default)]
pub struct DeliveryReport {
    /// Messages attempted.
    pub total: usize,
    /// Messages the provider accepted.
    pub successful: usize,
    /// Messages that failed.
    pub failed: usize,
    /// Per-message outcomes, in send order.
    pub outcomes: Vec<DeliveryOutcome>,
}

impl DeliveryReport {
    /// Builds the counters from a list of outcomes.
    pub fn from_outcomes(outcomes: Vec<DeliveryOutcome>) -> Self {
        let successful = outcomes.iter().filter(|o| o.succeeded()).count();
        Self {
            total: outcomes.len(),
            successful,
            failed: outcomes.len() - successful,
            outcomes,
        }
    }

    /// True when nothing failed.
    pub fn all_delivered(&self) -> bool {
        self.failed == 0
    }
}
