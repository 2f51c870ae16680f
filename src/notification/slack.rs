//! Slack-style notification channel.

use crate::core::{DeliveryError, NotificationRequest, NotificationService, TraceEntry};
use crate::sink::TraceSink;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

const CHANNEL: &str = "slack";

/// Posts notifications to a chat channel. The recipient is a channel name
/// such as `#ops`.
pub struct SlackNotificationService {
    sink: Arc<dyn TraceSink>,
}

impl SlackNotificationService {
    /// Creates a new `SlackNotificationService` that records deliveries in `sink`.
    pub fn new(sink: Arc<dyn TraceSink>) -> Self {
        Self { sink }
    }

    // Subject and body go on separate lines.
    fn render(request: &NotificationRequest<'_>) -> String {
        format!(
            "Channel: {}\nMessage: {}\n{}",
            request.recipient, request.subject, request.message
        )
    }
}

#[async_trait]
impl NotificationService for SlackNotificationService {
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

        debug!("Slack notification handed to transport.");
        Ok(())
    }
}
