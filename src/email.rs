//! A direct email sender with no abstraction in front of it.
//!
//! `EmailService` deliberately does not implement
//! [`crate::core::NotificationService`]. Code that holds one is bound to
//! email; see [`crate::legacy::AlertReporter`] for such a caller and
//! [`crate::dispatch::AlertDispatcher`] for the alternative.

use crate::core::{DeliveryError, NotificationRequest, TraceEntry};
use crate::sink::{TraceSink, TracingSink};
use tracing::instrument;

const CHANNEL: &str = "email";

/// Sends email over SMTP. Its log sink is fixed at construction.
#[derive(Debug, Default)]
pub struct EmailService {
    sink: TracingSink,
}

impl EmailService {
    pub fn new() -> Self {
        Self {
            sink: TracingSink::new(),
        }
    }

    /// Sends one email.
    #[instrument(skip(self, subject, body))]
    pub async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), DeliveryError> {
        let request = NotificationRequest::new(to, subject, body);
        request.validate(CHANNEL)?;

        let rendered = format!("via SMTP\nTo: {}\nSubject: {}", to, subject);
        let entry = TraceEntry::new(CHANNEL, &request, rendered);
        self.sink
            .emit(&entry)
            .map_err(|source| DeliveryError::Unavailable {
                channel: CHANNEL,
                source,
            })
    }
}
