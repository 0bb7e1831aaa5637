//! # Gift-Circle Runtime
//!
//! Command-line entry point: reads an event submission from a JSON file,
//! runs the full event-creation workflow, and reports delivery results.
//!
//! ```text
//! gift-circle <submission.json>
//! ```
//!
//! The submission file carries the event details plus the participant list:
//!
//! ```json
//! {
//!   "event": {
//!     "name": "Office Party",
//!     "exchange_date": "2026-12-24",
//!     "budget": 25.0,
//!     "organizer_email": "organizer@example.com"
//!   },
//!   "participants": [
//!     { "name": "Alice", "email": "alice@example.com", "wish_note": "books" }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use exchange_runtime::{EventSubmission, ExchangeContainer, RuntimeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(true)
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: gift-circle <submission.json>")?;

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read submission file {path}"))?;
    let submission: EventSubmission =
        serde_json::from_str(&raw).context("failed to parse submission JSON")?;

    let config = RuntimeConfig::from_env().map_err(anyhow::Error::msg)?;
    let container = ExchangeContainer::new(&config);

    let report = container
        .workflow()
        .run(submission)
        .await
        .context("event workflow failed")?;

    info!(
        event_id = %report.event.id,
        participants = report.participant_count,
        delivered = report.delivery.successful,
        failed = report.delivery.failed,
        "Event created"
    );

    for outcome in &report.delivery.outcomes {
        if let Err(err) = &outcome.result {
            warn!(to = %outcome.to, error = %err, "Notification not delivered");
        }
    }

    Ok(())
}
