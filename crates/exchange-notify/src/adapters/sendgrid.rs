//! SendGrid client.

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::config::NotifyConfig;
use crate::domain::entities::EmailMessage;
use crate::domain::errors::ProviderError;
use crate::ports::outbound::EmailProvider;

const SENDGRID_ENDPOINT: &str = "https://api.sendgrid.com/v3/mail/send";

/// Thin client over SendGrid's v3 mail/send endpoint.
pub struct SendGridProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    from_email: String,
    from_name: String,
}

impl SendGridProvider {
    /// Client using the public SendGrid endpoint.
    pub fn new(config: &NotifyConfig) -> Self {
        Self::with_endpoint(config, SENDGRID_ENDPOINT)
    }

    /// Client against an alternate endpoint (tests point this at a stub).
    pub fn with_endpoint(config: &NotifyConfig, endpoint: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_owned(),
            api_key: config.api_key.clone(),
            from_email: config.from_email.clone(),
            from_name: config.from_name.clone(),
        }
    }
}

#[async_trait]
impl EmailProvider for SendGridProvider {
    async fn send(&self, message: &EmailMessage) -> Result<String, ProviderError> {
        let request = json!({
            "personalizations": [{
                "to": [{ "email": message.to }],
                "subject": message.subject,
            }],
            "from": {
                "email": self.from_email,
                "name": self.from_name,
            },
            "content": [{
                "type": "text/plain",
                "value": message.body,
            }],
        });

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

        // SendGrid returns 202 with no body; the message id travels in a
        // response header.
        let id = response
            .headers()
            .get("x-message-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("accepted")
            .to_owned();

        debug!(to = %message.to, id = %id, "SendGrid accepted message");
        Ok(id)
    }

    fn name(&self) -> &'static str {
        "sendgrid"
    }
}
