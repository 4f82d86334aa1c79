//! Order-confirmation mail via EmailJS.
//!
//! Confirmation mail is best-effort: the checkout flow fires the send and
//! never awaits it on the critical path, so failures here are logged and
//! order completion proceeds regardless.

use serde::Serialize;
use thiserror::Error;

use crate::config::MailerConfig;

/// EmailJS send endpoint path.
const SEND_PATH: &str = "/api/v1.0/email/send";

/// Errors that can occur when sending confirmation mail.
#[derive(Debug, Error)]
pub enum MailerError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The configured endpoint could not be joined into a URL.
    #[error("invalid mail endpoint: {0}")]
    Endpoint(String),
}

/// A rendered confirmation mail.
#[derive(Debug, Clone, Serialize)]
pub struct OrderEmail {
    /// Recipient address (from the shipping form, not the account).
    pub to_email: String,
    pub subject: String,
    /// Plain-text body.
    pub message: String,
}

/// A collaborator able to deliver order-confirmation mail.
pub trait ConfirmationMailer: Send + Sync {
    /// Deliver one confirmation mail.
    fn send(&self, email: &OrderEmail) -> impl Future<Output = Result<(), MailerError>> + Send;
}

/// EmailJS-backed mailer.
#[derive(Debug, Clone)]
pub struct EmailJsMailer {
    client: reqwest::Client,
    config: MailerConfig,
}

impl EmailJsMailer {
    /// Create a new EmailJS mailer.
    #[must_use]
    pub fn new(config: MailerConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

impl ConfirmationMailer for EmailJsMailer {
    async fn send(&self, email: &OrderEmail) -> Result<(), MailerError> {
        let url = self
            .config
            .api_base
            .join(SEND_PATH)
            .map_err(|e| MailerError::Endpoint(e.to_string()))?;

        let body = serde_json::json!({
            "service_id": self.config.service_id,
            "template_id": self.config.template_id,
            "user_id": self.config.public_key,
            "template_params": {
                "from_name": self.config.from_name,
                "from_email": self.config.from_email,
                "to_email": email.to_email,
                "subject": email.subject,
                "message": email.message,
            }
        });

        let response = self.client.post(url).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(MailerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}
