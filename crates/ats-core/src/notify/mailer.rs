use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use super::EmailMessage;
use crate::config::EmailConfig;

/// Synchronous-result provider seam: send one message, get a receipt or an
/// error. No retry, no queue, no delivery tracking beyond this.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<Receipt, MailerError>;
}

/// Provider acknowledgement for a sent message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub message_id: String,
}

/// Error raised by a mail provider.
#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    #[error("mail transport failed: {0}")]
    Transport(String),
    #[error("mail provider rejected the message: {0}")]
    Rejected(String),
}

/// Builds the provider from configuration: the REST provider when an endpoint
/// and API key are present, otherwise the non-sending log-only fallback.
pub fn from_config(config: &EmailConfig) -> Box<dyn Mailer> {
    match (&config.endpoint, &config.api_key) {
        (Some(endpoint), Some(api_key)) => match RestMailer::new(
            endpoint.clone(),
            api_key.clone(),
            config.from_address.clone(),
        ) {
            Ok(mailer) => Box::new(mailer),
            Err(error) => {
                tracing::warn!(%error, "mail provider unavailable, falling back to log-only mode");
                Box::new(LoggedMailer::new(config.from_address.clone()))
            }
        },
        _ => Box::new(LoggedMailer::new(config.from_address.clone())),
    }
}

/// Non-sending fallback used when no provider credential is configured:
/// messages are logged and acknowledged with a synthetic receipt.
pub struct LoggedMailer {
    from: String,
}

impl LoggedMailer {
    pub fn new(from: String) -> Self {
        Self { from }
    }
}

#[async_trait]
impl Mailer for LoggedMailer {
    async fn send(&self, message: &EmailMessage) -> Result<Receipt, MailerError> {
        info!(
            from = %self.from,
            to = %message.to,
            subject = %message.subject,
            "log-only mode, not sending"
        );
        Ok(Receipt {
            message_id: format!("logged-{}", Uuid::new_v4()),
        })
    }
}

/// HTTPS provider: posts the message as JSON to the configured endpoint with
/// an API-key bearer header.
pub struct RestMailer {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    from: String,
}

#[derive(Debug, Deserialize)]
struct ProviderResponse {
    message_id: String,
}

impl RestMailer {
    pub fn new(endpoint: String, api_key: String, from: String) -> Result<Self, MailerError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|error| MailerError::Transport(error.to_string()))?;
        Ok(Self {
            client,
            endpoint,
            api_key,
            from,
        })
    }
}

#[async_trait]
impl Mailer for RestMailer {
    async fn send(&self, message: &EmailMessage) -> Result<Receipt, MailerError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "from": self.from,
                "to": message.to,
                "subject": message.subject,
                "html": message.html_body,
            }))
            .send()
            .await
            .map_err(|error| MailerError::Transport(error.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(MailerError::Rejected(format!("{status}: {body}")));
        }

        let parsed: ProviderResponse = response
            .json()
            .await
            .map_err(|error| MailerError::Transport(error.to_string()))?;
        Ok(Receipt {
            message_id: parsed.message_id,
        })
    }
}
