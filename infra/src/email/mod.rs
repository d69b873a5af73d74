//! Email Service Module
//!
//! Email delivery for verification codes.
//!
//! ## Features
//!
//! - **Email Service Trait**: Common interface for all providers
//! - **SMTP Implementation**: STARTTLS relay via lettre
//! - **Mock Implementation**: Log output for development
//! - **Delivery Adapter**: Bridges providers to the core delivery trait

pub mod email_service;
pub mod mock_email;
pub mod smtp;

pub use email_service::EmailService;
pub use mock_email::{CapturedEmail, MockEmailService};
pub use smtp::SmtpEmailService;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use vt_core::services::verification::MessageDeliveryTrait;

use crate::config::{EmailConfig, EmailProvider};
use crate::InfrastructureError;

/// Create an email service based on configuration
///
/// If the SMTP client cannot be built, falls back to the mock service when
/// `fallback_to_mock` is set and returns the error otherwise.
pub fn create_email_service(
    config: &EmailConfig,
) -> Result<Box<dyn EmailService>, InfrastructureError> {
    let mock = || MockEmailService::with_options(config.log_message_body, false);
    match config.provider {
        EmailProvider::Mock => Ok(Box::new(mock())),
        EmailProvider::Smtp => match SmtpEmailService::new(config) {
            Ok(service) => Ok(Box::new(service)),
            Err(e) if config.fallback_to_mock => {
                tracing::error!("Failed to initialize SMTP email service: {}", e);
                tracing::warn!("Falling back to mock email service");
                Ok(Box::new(mock()))
            }
            Err(e) => Err(e),
        },
    }
}

/// Adapter that implements the core delivery trait for any email service
pub struct EmailDeliveryAdapter {
    inner: Box<dyn EmailService>,
}

impl EmailDeliveryAdapter {
    pub fn new(inner: Box<dyn EmailService>) -> Self {
        Self { inner }
    }

    /// Build the adapter around the configured provider
    pub fn from_config(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        create_email_service(config).map(Self::new)
    }

    pub fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }

    /// Whether the underlying provider is reachable right now
    pub async fn is_available(&self) -> bool {
        self.inner.is_available().await
    }
}

#[async_trait]
impl MessageDeliveryTrait for EmailDeliveryAdapter {
    async fn send_message(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, String> {
        self.inner
            .send_email(recipient, subject, body)
            .await
            .map_err(|e| e.to_string())
    }
}
