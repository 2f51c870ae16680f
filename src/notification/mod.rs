//! Notification channels behind the `NotificationService` abstraction.
//!
//! Each channel is an independent implementation of
//! [`crate::core::NotificationService`]. Callers are handed one of them by
//! the composition root in [`crate::services`] and never name a concrete type.
pub mod retry;
pub mod slack;
pub mod sms;

pub use retry::{RetryConfig, RetryingNotificationService};
pub use slack::SlackNotificationService;
pub use sms::SmsNotificationService;
