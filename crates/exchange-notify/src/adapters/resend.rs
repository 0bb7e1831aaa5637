//! Resend client.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::NotifyConfig;
use crate::domain::entities::EmailMessage;
use crate::domain::errors::ProviderError;
use crate::ports::outbound::EmailProvider;

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

#[derive(Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct SendResponse {
    id: String,
}

/// Thin client over Resend's send endpoint.
pub struct ResendProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    sender: String,
}

impl ResendProvider {
    /// Client using the public Resend endpoint.
    pub fn new(config: &NotifyConfig) -> Self {
        Self::with_endpoint(config, RESEND_ENDPOINT)
    }

    /// Client against an alternate endpoint (tests point this at a stub).
    pub fn with_endpoint(config: &NotifyConfig, endpoint: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_owned(),
            api_key: config.api_key.clone(),
            sender: config.sender(),
        }
    }
}

#[async_trait]
impl EmailProvider for ResendProvider {
    async fn send(&self, message: &EmailMessage) -> Result<String, ProviderError> {
        let request = SendRequest {
            from: &self.sender,
            to: [message.to.as_str()],
            subject: &message.subject,
            text: &message.body,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(status.as_u16(), detail));
        }

        let accepted: SendResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        debug!(to = %message.to, id = %accepted.id, "Resend accepted message");
        Ok(accepted.id)
    }

    fn name(&self) -> &'static str {
        "resend"
    }
}
