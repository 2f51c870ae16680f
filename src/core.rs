//! Core domain types and service traits for the notifier
//!
//! This module defines the notification capability that high-level code
//! depends on, the error it reports, and the trace record every
//! implementation emits in place of a real delivery.

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::sink::SinkError;

/// The single failure kind of a send operation.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The channel refused the payload (e.g. a malformed recipient).
    #[error("{channel} rejected the notification: {reason}")]
    Rejected {
        channel: &'static str,
        reason: String,
    },
    /// The channel's transport could not be reached.
    #[error("{channel} transport unavailable")]
    Unavailable {
        channel: &'static str,
        #[source]
        source: SinkError,
    },
}

impl DeliveryError {
    /// The channel label of the implementation that failed.
    pub fn channel(&self) -> &'static str {
        match self {
            DeliveryError::Rejected { channel, .. } => channel,
            DeliveryError::Unavailable { channel, .. } => channel,
        }
    }

    /// Whether a later attempt on the same channel could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, DeliveryError::Unavailable { .. })
    }
}

/// The three parameters of a single send, borrowed for the duration of the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationRequest<'a> {
    /// Channel-specific address: email address, phone number or channel name.
    pub recipient: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
}

impl<'a> NotificationRequest<'a> {
    pub fn new(recipient: &'a str, subject: &'a str, message: &'a str) -> Self {
        Self {
            recipient,
            subject,
            message,
        }
    }

    /// Rejects requests with an empty or blank recipient. Subject and message
    /// are passed through untouched, even when empty.
    pub fn validate(&self, channel: &'static str) -> Result<(), DeliveryError> {
        if self.recipient.trim().is_empty() {
            return Err(DeliveryError::Rejected {
                channel,
                reason: "recipient must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// The diagnostic record emitted once per successful send.
///
/// `rendered` holds the channel-specific text (one or more lines); the other
/// fields carry the raw values verbatim for structured sinks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceEntry {
    pub channel: &'static str,
    pub recipient: String,
    pub subject: String,
    pub message: String,
    pub rendered: String,
}

impl TraceEntry {
    pub fn new(channel: &'static str, request: &NotificationRequest<'_>, rendered: String) -> Self {
        Self {
            channel,
            recipient: request.recipient.to_string(),
            subject: request.subject.to_string(),
            message: request.message.to_string(),
            rendered,
        }
    }
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.channel, self.rendered)
    }
}

// =============================================================================
// Service Traits
// =============================================================================

/// Sends a notification to a recipient over some channel.
///
/// Callers hold this as `Arc<dyn NotificationService>` and never learn which
/// implementation they were given. Implementations must not retry internally;
/// wrap them in [`crate::notification::retry::RetryingNotificationService`]
/// for that.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// A short label identifying the channel (e.g., "sms", "slack").
    /// Used for logging and in errors.
    fn channel(&self) -> &'static str;

    /// Sends one notification.
    ///
    /// # Arguments
    /// * `recipient` - Channel-specific address, interpreted by the implementation
    /// * `subject` - Short subject line
    /// * `message` - Body text
    ///
    /// # Returns
    /// * `Ok(())` once the channel accepted the notification
    /// * `Err(DeliveryError)` if the payload was rejected or the transport is unavailable
    async fn send_notification(
        &self,
        recipient: &str,
        subject: &str,
        message: &str,
    ) -> Result<(), DeliveryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_blank_recipient() {
        let request = NotificationRequest::new("   ", "Alert", "Disk at 90%");
        let err = request.validate("sms").unwrap_err();
        assert!(matches!(err, DeliveryError::Rejected { channel: "sms", .. }));
        assert!(!err.is_transient());
    }

    #[test]
    fn test_validate_accepts_empty_subject_and_message() {
        let request = NotificationRequest::new("#ops", "", "");
        assert!(request.validate("slack").is_ok());
    }

    #[test]
    fn test_trace_entry_display_prefixes_channel() {
        let request = NotificationRequest::new("+15551234567", "Alert", "Disk at 90%");
        let entry = TraceEntry::new("sms", &request, "Alert - Disk at 90%".to_string());
        assert_eq!(entry.to_string(), "[sms] Alert - Disk at 90%");
        assert_eq!(entry.recipient, "+15551234567");
    }

    #[test]
    fn test_unavailable_leaves_cause_to_source_chain() {
        let err = DeliveryError::Unavailable {
            channel: "slack",
            source: SinkError::Closed("transport unavailable".to_string()),
        };

        assert_eq!(err.to_string(), "slack transport unavailable");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "sink closed: transport unavailable");
        assert_eq!(
            format!("{:#}", anyhow::Error::from(err)),
            "slack transport unavailable: sink closed: transport unavailable"
        );
    }
}
