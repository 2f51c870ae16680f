#![allow(dead_code)]
use async_trait::async_trait;
use notifier::core::{DeliveryError, NotificationService};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

/// A mock NotificationService that counts calls and can be told to fail.
#[derive(Clone, Debug, Default)]
pub struct CountingService {
    pub calls: Arc<AtomicUsize>,
    pub reject: bool,
}

impl CountingService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NotificationService for CountingService {
    fn channel(&self) -> &'static str {
        "counting_mock"
    }

    async fn send_notification(
        &self,
        _recipient: &str,
        _subject: &str,
        _message: &str,
    ) -> Result<(), DeliveryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.reject {
            return Err(DeliveryError::Rejected {
                channel: "counting_mock",
                reason: "told to reject".to_string(),
            });
        }
        Ok(())
    }
}
