//! Error types for the notification collaborator.

use exchange_types::ParticipantId;
use thiserror::Error;

/// Per-message delivery failure, categorized by HTTP status class the way
/// mail APIs report them.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// 401/403: bad or revoked API key.
    #[error("provider rejected credentials")]
    Unauthorized,

    /// 429: provider throttled the sender.
    #[error("provider rate limit hit")]
    RateLimited,

    /// Other 4xx: the provider refused this particular message.
    #[error("provider rejected message ({status}): {detail}")]
    Rejected { status: u16, detail: String },

    /// 5xx: provider-side failure.
    #[error("provider server error ({status})")]
    ServerError { status: u16 },

    /// The request never completed.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl ProviderError {
    /// Maps a non-success HTTP status to its category.
    pub fn from_status(status: u16, detail: String) -> Self {
        match status {
            401 | 403 => Self::Unauthorized,
            429 => Self::RateLimited,
            400..=499 => Self::Rejected { status, detail },
            _ => Self::ServerError { status },
        }
    }
}

/// Run-level notification failures.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// A participant has no assignment in the supplied set; the set should
    /// have been validated upstream, so this is a wiring defect.
    #[error("no assignment found for participant {0}")]
    MissingAssignment(ParticipantId),
}
