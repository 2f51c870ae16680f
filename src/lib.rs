/// Notifier - notification channels behind a single capability trait
///
/// High-level code depends on [`core::NotificationService`]; the concrete
/// channel (SMS, Slack) is chosen by the composition root in [`services`].
/// [`email::EmailService`] is kept as the directly-bound counterexample.
pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod email;
pub mod legacy;
pub mod notification;
pub mod services;
pub mod sink;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export core types for convenience
pub use crate::core::*;
