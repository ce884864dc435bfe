//! Result Notifier Port - Delivers a finished result to its requester.
//!
//! Delivery has its own failure mode. A failed delivery never invalidates or
//! retries the computation that produced the result.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::EmailAddress;

/// A file attached to a result notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultAttachment {
    /// File name shown to the recipient.
    pub filename: String,
    /// Raw file content.
    pub content: Vec<u8>,
}

impl ResultAttachment {
    pub fn new(filename: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content,
        }
    }
}

/// Port for delivering result files.
#[async_trait]
pub trait ResultNotifier: Send + Sync {
    /// Sends the result file to the recipient.
    ///
    /// # Errors
    ///
    /// Returns `DeliveryError::NotConfigured` when delivery is disabled.
    async fn deliver_result(
        &self,
        recipient: &EmailAddress,
        attachment: &ResultAttachment,
    ) -> Result<(), DeliveryError>;
}

/// Errors from result delivery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    /// No delivery channel is configured.
    #[error("result delivery is not configured")]
    NotConfigured,

    /// Credentials were rejected.
    #[error("authentication with the delivery provider failed")]
    AuthenticationFailed,

    /// Provider refused the message.
    #[error("delivery rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Request did not complete in time.
    #[error("delivery timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Network error while contacting the provider.
    #[error("network error: {0}")]
    Network(String),
}

impl DeliveryError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a rejection error.
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }
}
