//! A caller bound directly to [`EmailService`].
//!
//! `AlertReporter` builds its own sender, so redirecting its alerts to SMS or
//! Slack means editing this file. Compare [`crate::dispatch::AlertDispatcher`].

use crate::core::DeliveryError;
use crate::email::EmailService;
use tracing::info;

pub struct AlertReporter {
    email: EmailService,
}

impl AlertReporter {
    pub fn new() -> Self {
        Self {
            email: EmailService::new(),
        }
    }

    pub async fn report(&self, to: &str, subject: &str, body: &str) -> Result<(), DeliveryError> {
        info!("Reporting alert by email.");
        self.email.send_email(to, subject, body).await
    }
}

impl Default for AlertReporter {
    fn default() -> Self {
        Self::new()
    }
}
