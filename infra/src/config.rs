//! Configuration management for infrastructure services
//!
//! Handles:
//! - Email provider selection and SMTP credentials
//! - The placeholder access token

use serde::{Deserialize, Serialize};
use std::env;
use vt_shared::config::Environment;

use crate::InfrastructureError;

/// Infrastructure configuration settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InfrastructureConfig {
    /// Email delivery configuration
    pub email: EmailConfig,
    /// Token issuing configuration
    pub token: TokenConfig,
}

impl InfrastructureConfig {
    /// Load infrastructure configuration from the environment (and `.env` if present)
    pub fn from_env() -> Result<Self, InfrastructureError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            email: EmailConfig::from_env()?,
            token: TokenConfig::from_env(),
        })
    }
}

/// Email provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    /// Send through an SMTP relay
    Smtp,
    /// Log messages instead of sending them
    #[default]
    Mock,
}

impl std::str::FromStr for EmailProvider {
    type Err = InfrastructureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "smtp" => Ok(EmailProvider::Smtp),
            "mock" => Ok(EmailProvider::Mock),
            other => Err(InfrastructureError::Config(format!(
                "Unknown EMAIL_PROVIDER '{}', expected 'smtp' or 'mock'",
                other
            ))),
        }
    }
}

/// Email service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Delivery provider
    pub provider: EmailProvider,
    /// SMTP relay host
    pub smtp_host: String,
    /// SMTP port (STARTTLS)
    pub smtp_port: u16,
    /// SMTP username
    pub smtp_username: String,
    /// SMTP password
    #[serde(skip_serializing)]
    pub smtp_password: String,
    /// Sender mailbox, e.g. `VehicleTracker <no-reply@example.com>`
    pub from: String,
    /// Let the mock provider log full message bodies, codes included
    #[serde(default)]
    pub log_message_body: bool,
    /// Use the mock provider if the SMTP client cannot be built
    #[serde(default)]
    pub fallback_to_mock: bool,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: EmailProvider::Mock,
            smtp_host: String::new(),
            smtp_port: 587,
            smtp_username: String::new(),
            smtp_password: String::new(),
            from: "VehicleTracker <no-reply@vehicletracker.local>".to_string(),
            log_message_body: false,
            fallback_to_mock: true,
        }
    }
}

impl EmailConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::from_source(Environment::from_env(), |key| env::var(key).ok())
    }

    /// Build the configuration from a variable lookup
    ///
    /// `SMTP_HOST` is required when `EMAIL_PROVIDER=smtp`. Production must name
    /// its provider explicitly and never falls back to the mock; only
    /// development logs message bodies.
    pub fn from_source(
        environment: Environment,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, InfrastructureError> {
        let defaults = Self::default();
        let provider = match var("EMAIL_PROVIDER") {
            Some(value) => value.parse()?,
            None if environment.is_production() => {
                return Err(InfrastructureError::Config(
                    "EMAIL_PROVIDER must be set in production".to_string(),
                ))
            }
            None => defaults.provider,
        };

        let smtp_host = var("SMTP_HOST").unwrap_or_default();
        if provider == EmailProvider::Smtp && smtp_host.is_empty() {
            return Err(InfrastructureError::Config(
                "SMTP_HOST must be set when EMAIL_PROVIDER=smtp".to_string(),
            ));
        }

        Ok(Self {
            provider,
            smtp_host,
            smtp_port: var("SMTP_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.smtp_port),
            smtp_username: var("SMTP_USERNAME").unwrap_or_default(),
            smtp_password: var("SMTP_PASSWORD").unwrap_or_default(),
            from: var("EMAIL_FROM").unwrap_or(defaults.from),
            log_message_body: environment.is_development(),
            fallback_to_mock: !environment.is_production(),
        })
    }

    /// Whether SMTP credentials were supplied
    pub fn has_credentials(&self) -> bool {
        !self.smtp_username.is_empty()
    }
}

/// Token issuing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Token returned after every successful verification
    pub static_token: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            static_token: "driver-token-here".to_string(),
        }
    }
}

impl TokenConfig {
    /// Create configuration from `STATIC_ACCESS_TOKEN`
    pub fn from_env() -> Self {
        Self {
            static_token: env::var("STATIC_ACCESS_TOKEN")
                .unwrap_or_else(|_| Self::default().static_token),
        }
    }
}
