//! Outbound port: one mail provider, one message at a time.

use async_trait::async_trait;

use crate::domain::entities::EmailMessage;
use crate::domain::errors::ProviderError;

/// Delivers a single rendered message and reports the provider's verdict.
///
/// Implementations surface each failure individually; whether to continue
/// with the remaining messages is the caller's decision (the notification
/// service does). Retry and failover policies live outside this port.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Sends one message, returning the provider's message id on success.
    async fn send(&self, message: &EmailMessage) -> Result<String, ProviderError>;

    /// Short provider label for logging.
    fn name(&self) -> &'static str;
}
