//! The composition root: turns configuration into concrete implementations.
//!
//! This is the only place that names `SmsNotificationService` or
//! `SlackNotificationService`. Everything downstream holds the trait object.

use crate::{
    config::{Channel, NotifierConfig, OutputConfig, SinkKind},
    core::NotificationService,
    notification::{RetryingNotificationService, SlackNotificationService, SmsNotificationService},
    sink::{StdoutSink, TraceSink, TracingSink},
};
use std::sync::Arc;
use tracing::info;

/// Builds the trace sink selected by the output configuration.
pub fn build_sink(config: &OutputConfig) -> Arc<dyn TraceSink> {
    match config.sink {
        SinkKind::Log => Arc::new(TracingSink::new()),
        SinkKind::Stdout => Arc::new(StdoutSink::new(config.format)),
    }
}

/// Builds the notification service for the configured channel, wrapped in a
/// retrying decorator when a retry policy is configured.
pub fn build_notification_service(
    config: &NotifierConfig,
    sink: Arc<dyn TraceSink>,
) -> Arc<dyn NotificationService> {
    let service: Arc<dyn NotificationService> = match config.channel {
        Channel::Sms => Arc::new(SmsNotificationService::new(sink)),
        Channel::Slack => Arc::new(SlackNotificationService::new(sink)),
    };
    info!("{} notification channel enabled.", config.channel);

    match &config.retry {
        Some(retry) => {
            info!(
                max_retries = retry.max_retries,
                initial_backoff_ms = retry.initial_backoff_ms,
                "Retrying transient delivery failures."
            );
            Arc::new(RetryingNotificationService::new(service, retry.clone()))
        }
        None => service,
    }
}
