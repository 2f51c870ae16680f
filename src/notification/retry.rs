//! A retrying decorator for any notification channel.
//!
//! Retry policy lives here rather than in the channels themselves, so the
//! same policy applies to whichever implementation the composition root picks.

use crate::core::{DeliveryError, NotificationService};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, instrument, warn};

/// Configuration for delivery retries.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct RetryConfig {
    /// Number of retries after the first failed attempt.
    pub max_retries: u32,
    /// Backoff before the first retry in milliseconds. Doubles on each retry.
    pub initial_backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff_ms: 500,
        }
    }
}

/// Wraps a `NotificationService` and retries transient failures with
/// exponential backoff. Rejections are returned immediately.
pub struct RetryingNotificationService {
    inner: Arc<dyn NotificationService>,
    config: RetryConfig,
}

impl RetryingNotificationService {
    pub fn new(inner: Arc<dyn NotificationService>, config: RetryConfig) -> Self {
        Self { inner, config }
    }
}

#[async_trait]
impl NotificationService for RetryingNotificationService {
    fn channel(&self) -> &'static str {
        self.inner.channel()
    }

    #[instrument(skip_all, fields(recipient = %recipient))]
    async fn send_notification(
        &self,
        recipient: &str,
        subject: &str,
        message: &str,
    ) -> Result<(), DeliveryError> {
        let retries = self.config.max_retries;
        let mut attempt = 0;

        loop {
            match self.inner.send_notification(recipient, subject, message).await {
                Ok(()) => return Ok(()),
                Err(e) if !e.is_transient() => {
                    debug!(error = %e, "Notification rejected, not retrying.");
                    return Err(e);
                }
                Err(e) if attempt >= retries => {
                    warn!(error = %e, attempts = attempt + 1, "Giving up on notification");
                    return Err(e);
                }
                Err(e) => {
                    let backoff = self
                        .config
                        .initial_backoff_ms
                        .saturating_mul(2_u64.saturating_pow(attempt));
                    debug!(error = %e, backoff_ms = backoff, "Retrying after backoff");
                    sleep(Duration::from_millis(backoff)).await;
                    attempt += 1;
                }
            }
        }
    }
}
