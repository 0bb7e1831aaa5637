//! Runtime configuration and subsystem wiring.

use std::sync::Arc;

use exchange_engine::AssignmentEngine;
use exchange_notify::{adapters, NotificationService, NotifyConfig, ProviderKind};
use exchange_store::InMemoryEventStore;
use tracing::info;

use crate::workflow::EventWorkflow;

/// Configuration read from the environment at startup.
///
/// | Variable            | Default                | Description              |
/// |---------------------|------------------------|--------------------------|
/// | `GC_MAIL_PROVIDER`  | `resend`               | `resend` or `sendgrid`   |
/// | `GC_MAIL_API_KEY`   | (required)             | Provider API key         |
/// | `GC_FROM_EMAIL`     | `santa@gift-circle.dev`| Sender address           |
/// | `GC_FROM_NAME`      | `Gift Circle`          | Sender display name      |
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Notification settings.
    pub notify: NotifyConfig,
}

impl RuntimeConfig {
    /// Loads the configuration from environment variables.
    pub fn from_env() -> Result<Self, String> {
        let provider: ProviderKind = std::env::var("GC_MAIL_PROVIDER")
            .unwrap_or_else(|_| "resend".to_owned())
            .parse()?;
        let api_key =
            std::env::var("GC_MAIL_API_KEY").map_err(|_| "GC_MAIL_API_KEY not set".to_owned())?;
        let from_email =
            std::env::var("GC_FROM_EMAIL").unwrap_or_else(|_| "santa@gift-circle.dev".to_owned());
        let from_name =
            std::env::var("GC_FROM_NAME").unwrap_or_else(|_| "Gift Circle".to_owned());

        Ok(Self {
            notify: NotifyConfig {
                provider,
                api_key,
                from_email,
                from_name,
            },
        })
    }
}

/// All subsystems of one running instance, initialized together.
pub struct ExchangeContainer {
    /// Persistence collaborator.
    pub store: Arc<InMemoryEventStore>,
    /// Assignment engine, entropy-seeded.
    pub engine: Arc<AssignmentEngine>,
    /// Notification collaborator over the configured provider.
    pub notifier: Arc<NotificationService>,
}

impl ExchangeContainer {
    /// Wires store, engine, and notifier from the configuration.
    pub fn new(config: &RuntimeConfig) -> Self {
        info!(provider = %config.notify.provider, "Initializing Gift-Circle subsystems");

        Self {
            store: Arc::new(InMemoryEventStore::new()),
            engine: Arc::new(AssignmentEngine::new()),
            notifier: Arc::new(NotificationService::new(adapters::provider_for(
                &config.notify,
            ))),
        }
    }

    /// Event workflow over this container's subsystems.
    pub fn workflow(&self) -> EventWorkflow {
        EventWorkflow::new(
            self.store.clone(),
            self.engine.clone(),
            self.notifier.clone(),
        )
    }
}
