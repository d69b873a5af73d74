//! Mock Email Service Implementation
//!
//! Logs messages instead of sending them. Used in development and tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use uuid::Uuid;
use vt_shared::utils::mask_email;

use super::email_service::EmailService;
use crate::InfrastructureError;

/// A message captured by the mock service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Mock email service for development and testing
///
/// This implementation:
/// - Logs the full message only when `log_body` is set (the body carries the code)
/// - Generates mock message IDs
/// - Keeps the sent messages for inspection
#[derive(Clone)]
pub struct MockEmailService {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Messages sent so far
    outbox: Arc<Mutex<Vec<CapturedEmail>>>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to log message bodies
    log_body: bool,
}

impl MockEmailService {
    /// Create a new mock email service that does not log message bodies
    pub fn new() -> Self {
        Self::with_options(false, false)
    }

    /// Create a mock service with configurable options
    pub fn with_options(log_body: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            outbox: Arc::new(Mutex::new(Vec::new())),
            simulate_failure,
            log_body,
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// All messages sent so far, oldest first
    pub fn sent_messages(&self) -> Vec<CapturedEmail> {
        self.outbox.lock().map(|o| o.clone()).unwrap_or_default()
    }

    /// Last message sent to `to`
    pub fn last_message_to(&self, to: &str) -> Option<CapturedEmail> {
        self.sent_messages().into_iter().rev().find(|m| m.to == to)
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&mut self, simulate: bool) {
        self.simulate_failure = simulate;
    }
}

impl Default for MockEmailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailService for MockEmailService {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, InfrastructureError> {
        let masked = mask_email(to);

        if self.simulate_failure {
            warn!("Mock email service simulating failure for: {}", masked);
            return Err(InfrastructureError::Email(
                "Simulated email sending failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if let Ok(mut outbox) = self.outbox.lock() {
            outbox.push(CapturedEmail {
                to: to.to_string(),
                subject: subject.to_string(),
                body: body.to_string(),
            });
        }

        if self.log_body {
            info!(
                target: "email_service",
                provider = "mock",
                count,
                "Mock email #{} to {}: {} | {}",
                count,
                masked,
                subject,
                body
            );
        }

        info!(
            target: "email_service",
            provider = "mock",
            email = %masked,
            message_id = %message_id,
            "Email sent successfully (mock)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }

    async fn is_available(&self) -> bool {
        !self.simulate_failure
    }
}
