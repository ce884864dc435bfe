//! Resend Notifier - Implementation of ResultNotifier over the Resend HTTP API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = ResendConfig::new(api_key, "TOPSIS Service <noreply@example.com>")
//!     .with_base_url("https://api.resend.com");
//!
//! let notifier = ResendNotifier::new(config)?;
//! ```

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::EmailConfig;
use crate::domain::foundation::EmailAddress;
use crate::ports::{DeliveryError, ResultAttachment, ResultNotifier};

/// Default subject line of result emails.
pub const DEFAULT_SUBJECT: &str = "TOPSIS Analysis Result";

const RESULT_BODY: &str = "Dear User,\n\n\
Your TOPSIS analysis has been completed successfully.\n\n\
Please find the result file attached.\n\n\
Best regards,\n\
TOPSIS Web Service\n";

/// Configuration for the Resend notifier.
#[derive(Debug, Clone)]
pub struct ResendConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Value of the `from` field, e.g. `Name <address>`.
    pub from: String,
    /// Subject line.
    pub subject: String,
    /// Base URL for the API (default: https://api.resend.com).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl ResendConfig {
    /// Creates a new configuration with the given API key and sender.
    pub fn new(api_key: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            from: from.into(),
            subject: DEFAULT_SUBJECT.to_string(),
            base_url: "https://api.resend.com".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Builds the notifier configuration from the email config section.
    pub fn from_email_config(config: &EmailConfig) -> Self {
        Self::new(
            config.resend_api_key.expose_secret().clone(),
            config.from_header(),
        )
        .with_subject(config.subject.clone())
        .with_base_url(config.api_base_url.clone())
    }

    /// Sets the subject line.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Sends result files as email attachments through Resend.
pub struct ResendNotifier {
    config: ResendConfig,
    client: Client,
}

impl ResendNotifier {
    /// Creates a new notifier with the given configuration.
    pub fn new(config: ResendConfig) -> Result<Self, DeliveryError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DeliveryError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.config.base_url.trim_end_matches('/'))
    }

    fn to_resend_request(
        &self,
        recipient: &EmailAddress,
        attachment: &ResultAttachment,
    ) -> ResendEmailRequest {
        ResendEmailRequest {
            from: self.config.from.clone(),
            to: vec![recipient.as_str().to_string()],
            subject: self.config.subject.clone(),
            text: RESULT_BODY.to_string(),
            attachments: vec![ResendAttachment {
                filename: attachment.filename.clone(),
                content: general_purpose::STANDARD.encode(&attachment.content),
            }],
        }
    }

    async fn handle_response_status(response: Response) -> Result<(), DeliveryError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(classify_failure(status.as_u16(), body))
    }
}

/// Maps a non-success status to a delivery error.
fn classify_failure(status: u16, body: String) -> DeliveryError {
    match status {
        401 | 403 => DeliveryError::AuthenticationFailed,
        _ => DeliveryError::rejected(status, body),
    }
}

#[async_trait]
impl ResultNotifier for ResendNotifier {
    async fn deliver_result(
        &self,
        recipient: &EmailAddress,
        attachment: &ResultAttachment,
    ) -> Result<(), DeliveryError> {
        let request = self.to_resend_request(recipient, attachment);
        debug!(
            recipient = %recipient,
            attachment = %attachment.filename,
            bytes = attachment.content.len(),
            "Sending result email"
        );

        let response = self
            .client
            .post(self.emails_url())
            .bearer_auth(self.config.api_key())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DeliveryError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    DeliveryError::network(format!("Connection failed: {}", e))
                } else {
                    DeliveryError::network(e.to_string())
                }
            })?;

        Self::handle_response_status(response).await?;
        info!(recipient = %recipient, "Result email sent");
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Resend API Types
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct ResendEmailRequest {
    from: String,
    to: Vec<String>,
    subject: String,
    text: String,
    attachments: Vec<ResendAttachment>,
}

#[derive(Debug, Serialize)]
struct ResendAttachment {
    filename: String,
    /// Base64-encoded file content.
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notifier() -> ResendNotifier {
        let config = ResendConfig::new("re_test_key", "TOPSIS <noreply@example.com>")
            .with_base_url("https://mail.example.com/");
        ResendNotifier::new(config).unwrap()
    }

    #[test]
    fn config_defaults() {
        let config = ResendConfig::new("re_key", "from@example.com");
        assert_eq!(config.subject, "TOPSIS Analysis Result");
        assert_eq!(config.base_url, "https://api.resend.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.api_key(), "re_key");
    }

    #[test]
    fn config_debug_does_not_leak_key() {
        let config = ResendConfig::new("re_super_secret", "from@example.com");
        assert!(!format!("{:?}", config).contains("re_super_secret"));
    }

    #[test]
    fn emails_url_joins_base() {
        assert_eq!(notifier().emails_url(), "https://mail.example.com/emails");
    }

    #[test]
    fn request_encodes_attachment_as_base64() {
        let recipient = EmailAddress::parse("user@example.com").unwrap();
        let attachment = ResultAttachment::new("result_data.csv", b"ID,Score\n".to_vec());

        let request = notifier().to_resend_request(&recipient, &attachment);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["to"], serde_json::json!(["user@example.com"]));
        assert_eq!(json["subject"], "TOPSIS Analysis Result");
        assert_eq!(json["attachments"][0]["filename"], "result_data.csv");
        assert_eq!(json["attachments"][0]["content"], "SUQsU2NvcmUK");
        assert!(json["text"].as_str().unwrap().contains("Please find the result file attached."));
    }

    #[test]
    fn unauthorized_status_is_authentication_failure() {
        assert_eq!(
            classify_failure(401, String::new()),
            DeliveryError::AuthenticationFailed
        );
        assert_eq!(
            classify_failure(422, "bad recipient".to_string()),
            DeliveryError::rejected(422, "bad recipient")
        );
    }
}
