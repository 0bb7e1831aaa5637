//! Configuration for the notification collaborator.

use serde::{Deserialize, Serialize};

/// Which mail provider delivers this run's messages.
///
/// A tagged choice rather than parallel code paths: the adapters implement
/// one shared port and everything above it is provider-agnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// api.resend.com
    Resend,
    /// api.sendgrid.com
    SendGrid,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resend => write!(f, "resend"),
            Self::SendGrid => write!(f, "sendgrid"),
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "resend" => Ok(Self::Resend),
            "sendgrid" => Ok(Self::SendGrid),
            other => Err(format!("unknown mail provider: {other}")),
        }
    }
}

/// Notification configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Provider the messages go through.
    pub provider: ProviderKind,
    /// Provider API key.
    pub api_key: String,
    /// Sender address.
    pub from_email: String,
    /// Sender display name.
    pub from_name: String,
}

impl NotifyConfig {
    /// Formatted `Name <address>` sender header.
    pub fn sender(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }
}
