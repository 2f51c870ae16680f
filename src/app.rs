//! The main application logic, decoupled from the entry point.

use crate::{
    config::Config,
    core::{DeliveryError, NotificationService},
    dispatch::AlertDispatcher,
    legacy::AlertReporter,
    services::{build_notification_service, build_sink},
    sink::TraceSink,
};
use std::sync::Arc;
use tracing::info;

/// A fully wired application: a dispatcher bound to one notification channel.
pub struct App {
    dispatcher: AlertDispatcher,
}

impl App {
    /// Creates a new `AppBuilder` to construct an `App`.
    pub fn builder(config: Config) -> AppBuilder {
        AppBuilder::new(config)
    }

    /// The channel label of the wired implementation.
    pub fn channel(&self) -> &'static str {
        self.dispatcher.channel()
    }

    /// Sends one notification through the wired channel.
    pub async fn send(&self, recipient: &str, subject: &str, message: &str) -> Result<(), DeliveryError> {
        self.dispatcher.dispatch(recipient, subject, message).await
    }

    /// Sends one notification through the hard-wired email sender, bypassing
    /// the configured channel entirely.
    pub async fn send_legacy_email(to: &str, subject: &str, body: &str) -> Result<(), DeliveryError> {
        AlertReporter::new().report(to, subject, body).await
    }
}

/// Builder for the main application.
///
/// Separates constructing the components from running them, and lets tests
/// override the sink or the whole notification service.
pub struct AppBuilder {
    config: Config,
    sink_override: Option<Arc<dyn TraceSink>>,
    notification_service_override: Option<Arc<dyn NotificationService>>,
}

impl AppBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            sink_override: None,
            notification_service_override: None,
        }
    }

    /// Replaces the sink built from `config.output`.
    pub fn with_sink(mut self, sink: Arc<dyn TraceSink>) -> Self {
        self.sink_override = Some(sink);
        self
    }

    /// Replaces the notification service built from `config.notifier`.
    pub fn with_notification_service(mut self, service: Arc<dyn NotificationService>) -> Self {
        self.notification_service_override = Some(service);
        self
    }

    pub fn build(self) -> App {
        let service = match self.notification_service_override {
            Some(service) => service,
            None => {
                let sink = self
                    .sink_override
                    .unwrap_or_else(|| build_sink(&self.config.output));
                build_notification_service(&self.config.notifier, sink)
            }
        };
        info!(channel = service.channel(), "Application wired.");

        App {
            dispatcher: AlertDispatcher::new(service),
        }
    }
}
