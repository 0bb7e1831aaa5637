//! Adapters: provider clients behind the [`EmailProvider`] port.
//!
//! [`EmailProvider`]: crate::ports::outbound::EmailProvider

pub mod resend;
pub mod sendgrid;

use std::sync::Arc;

use crate::config::{NotifyConfig, ProviderKind};
use crate::ports::outbound::EmailProvider;

/// Builds the provider the configuration names.
pub fn provider_for(config: &NotifyConfig) -> Arc<dyn EmailProvider> {
    match config.provider {
        ProviderKind::Resend => Arc::new(resend::ResendProvider::new(config)),
        ProviderKind::SendGrid => Arc::new(sendgrid::SendGridProvider::new(config)),
    }
}
