//! Mock Result Notifier for testing.
//!
//! Records every delivery and can be told to fail.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::foundation::EmailAddress;
use crate::ports::{DeliveryError, ResultAttachment, ResultNotifier};

/// A delivery recorded by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentResult {
    pub recipient: String,
    pub attachment: ResultAttachment,
}

/// Mock notifier that records deliveries instead of sending them.
#[derive(Debug, Clone, Default)]
pub struct MockResultNotifier {
    sent: Arc<Mutex<Vec<SentResult>>>,
    failure: Option<DeliveryError>,
}

impl MockResultNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every delivery fail with the given error.
    pub fn failing_with(error: DeliveryError) -> Self {
        Self {
            sent: Arc::default(),
            failure: Some(error),
        }
    }

    /// Returns all recorded deliveries.
    pub fn sent(&self) -> Vec<SentResult> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of recorded deliveries.
    pub fn sent_count(&self) -> usize {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl ResultNotifier for MockResultNotifier {
    async fn deliver_result(
        &self,
        recipient: &EmailAddress,
        attachment: &ResultAttachment,
    ) -> Result<(), DeliveryError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(SentResult {
                recipient: recipient.as_str().to_string(),
                attachment: attachment.clone(),
            });
        Ok(())
    }
}
