//! Configuration for the verification service

use std::env;

use crate::domain::entities::{DEFAULT_CODE_TTL_SECONDS, MAX_CODE_TTL_SECONDS};

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Number of seconds before a verification code expires
    pub code_ttl_seconds: i64,
    /// Product name shown in the email subject
    pub sender_name: String,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: DEFAULT_CODE_TTL_SECONDS,
            sender_name: "VehicleTracker".to_string(),
        }
    }
}

impl VerificationServiceConfig {
    /// Load from `CODE_TTL_SECONDS` and `EMAIL_SENDER_NAME`
    ///
    /// A TTL that is missing, unparseable or outside `1..=MAX_CODE_TTL_SECONDS`
    /// falls back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            code_ttl_seconds: parse_ttl(env::var("CODE_TTL_SECONDS").ok().as_deref()),
            sender_name: env::var("EMAIL_SENDER_NAME").unwrap_or(defaults.sender_name),
        }
    }

    /// TTL clamped into `1..=MAX_CODE_TTL_SECONDS`
    pub fn effective_ttl_seconds(&self) -> i64 {
        self.code_ttl_seconds.clamp(1, MAX_CODE_TTL_SECONDS)
    }

    /// Subject line of the verification email
    pub fn subject(&self) -> String {
        format!("Your {} Verification Code", self.sender_name)
    }

    /// Body of the verification email
    pub fn body(&self, code: &str) -> String {
        let minutes = (self.effective_ttl_seconds() + 59) / 60;
        format!(
            "Your verification code is {}. It expires in {} minutes.",
            code, minutes
        )
    }
}

fn parse_ttl(value: Option<&str>) -> i64 {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|ttl| (1..=MAX_CODE_TTL_SECONDS).contains(ttl))
        .unwrap_or(DEFAULT_CODE_TTL_SECONDS)
}
