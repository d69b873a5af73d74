//! SMTP Email Service Implementation
//!
//! Sends plain-text verification emails through an SMTP relay using
//! STARTTLS. Failures are returned to the caller; nothing is retried here.

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{error, info};
use uuid::Uuid;
use vt_shared::utils::mask_email;

use super::email_service::EmailService;
use crate::config::EmailConfig;
use crate::InfrastructureError;

/// SMTP email service implementation
pub struct SmtpEmailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpEmailService {
    /// Create a new SMTP email service
    ///
    /// Fails if the relay host or the sender address is invalid.
    pub fn new(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        if config.smtp_host.is_empty() {
            return Err(InfrastructureError::Config(
                "SMTP host is not configured".to_string(),
            ));
        }

        let from: Mailbox = config.from.parse()?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port);
        if config.has_credentials() {
            builder = builder.credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ));
        }

        info!(
            "SMTP email service initialized with relay {}:{}",
            config.smtp_host, config.smtp_port
        );

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }

    /// Build a plain-text message
    pub fn build_message(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<Message, InfrastructureError> {
        let to: Mailbox = to.parse()?;
        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())?;
        Ok(message)
    }
}

#[async_trait]
impl EmailService for SmtpEmailService {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, InfrastructureError> {
        let masked = mask_email(to);
        let message = self.build_message(to, subject, body)?;

        let response = self.transport.send(message).await.map_err(|e| {
            error!(
                target: "email_service",
                provider = "smtp",
                email = %masked,
                error = %e,
                "Failed to send email"
            );
            InfrastructureError::Smtp(e)
        })?;

        let message_id = format!("smtp_{}", Uuid::new_v4());
        info!(
            target: "email_service",
            provider = "smtp",
            email = %masked,
            message_id = %message_id,
            smtp_code = %response.code(),
            "Email sent successfully"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "SMTP"
    }

    async fn is_available(&self) -> bool {
        self.transport.test_connection().await.unwrap_or(false)
    }
}
