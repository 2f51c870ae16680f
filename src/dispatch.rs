//! The high-level caller that depends only on the notification abstraction.

use crate::core::{DeliveryError, NotificationService};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Forwards alerts to whichever `NotificationService` it was constructed with.
///
/// The dispatcher never picks a channel itself; that is the job of the
/// composition root (see [`crate::services::build_notification_service`]).
#[derive(Clone)]
pub struct AlertDispatcher {
    notifier: Arc<dyn NotificationService>,
}

impl AlertDispatcher {
    pub fn new(notifier: Arc<dyn NotificationService>) -> Self {
        Self { notifier }
    }

    /// The channel label of the injected implementation.
    pub fn channel(&self) -> &'static str {
        self.notifier.channel()
    }

    /// Sends one alert. Failures are logged and returned; there is no fallback channel.
    #[instrument(skip(self, subject, message), fields(channel = self.notifier.channel()))]
    pub async fn dispatch(
        &self,
        recipient: &str,
        subject: &str,
        message: &str,
    ) -> Result<(), DeliveryError> {
        match self.notifier.send_notification(recipient, subject, message).await {
            Ok(()) => {
                info!("Alert dispatched.");
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to dispatch alert");
                Err(e)
            }
        }
    }
}
