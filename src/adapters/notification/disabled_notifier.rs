//! Notifier used when no email provider is configured.

use async_trait::async_trait;

use crate::domain::foundation::EmailAddress;
use crate::ports::{DeliveryError, ResultAttachment, ResultNotifier};

/// Refuses every delivery with `DeliveryError::NotConfigured`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledNotifier;

#[async_trait]
impl ResultNotifier for DisabledNotifier {
    async fn deliver_result(
        &self,
        _recipient: &EmailAddress,
        _attachment: &ResultAttachment,
    ) -> Result<(), DeliveryError> {
        Err(DeliveryError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn always_reports_not_configured() {
        let recipient = EmailAddress::parse("user@example.com").unwrap();
        let result = DisabledNotifier
            .deliver_result(&recipient, &ResultAttachment::new("r.csv", vec![]))
            .await;
        assert_eq!(result, Err(DeliveryError::NotConfigured));
    }
}
