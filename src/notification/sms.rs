//! SMS notification channel.

use crate::core::{DeliveryError, NotificationRequest, NotificationService, TraceEntry};
use crate::sink::TraceSink;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

const CHANNEL: &str = "sms";

/// Sends notifications as text messages. The recipient is a phone number.
pub struct SmsNotificationService {
    sink: Arc<dyn TraceSink>,
}

impl SmsNotificationService {
    /// Creates a new `SmsNotificationService` that records deliveries in `sink`.
    pub fn new(sink: Arc<dyn TraceSink>) -> Self {
        Self { sink }
    }

    /// SMS has no subject line, so it is folded into the body.
    fn render(request: &NotificationRequest<'_>) -> String {
        format!(
            "To: {}\nMessage: {} - {}",
            request.recipient, request.subject, request.message
        )
    }
}

#[async_trait]
impl NotificationService for SmsNotificationService {
    fn channel(&self) -> &'static str {
        CHANNEL
    }

    #[instrument(skip(self, subject, message), fields(channel = CHANNEL))]
    async fn send_notification(
        &self,
        recipient: &str,
        subject: &str,
        message: &str,
    ) -> Result<(), DeliveryError> {
        let request = NotificationRequest::new(recipient, subject, message);
        request.validate(CHANNEL)?;

        let entry = TraceEntry::new(CHANNEL, &request, Self::render(&request));
        self.sink
            .emit(&entry)
            .map_err(|source| DeliveryError::Unavailable {
                channel: CHANNEL,
                source,
            })?;

        debug!("SMS notification handed to transport.");
        Ok(())
    }
}
