//! Verification error taxonomy
//!
//! Every variant is recoverable by the caller: request a new code and retry.
//! Client-facing wording is chosen in the presentation layer.

use thiserror::Error;

/// Failures of the request-code / verify-code flow
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    /// No code was ever requested for this email, or it was already consumed
    #[error("No code sent")]
    NotFound,

    /// A code was issued but its validity window has elapsed
    #[error("Code expired")]
    Expired,

    /// The submitted code does not match the pending one
    #[error("Invalid code")]
    Invalid,

    /// The delivery channel could not send the code
    #[error("Failed to deliver verification code: {reason}")]
    DeliveryFailure { reason: String },
}

impl VerificationError {
    /// Stable machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            VerificationError::NotFound => "code_not_found",
            VerificationError::Expired => "code_expired",
            VerificationError::Invalid => "invalid_code",
            VerificationError::DeliveryFailure { .. } => "delivery_failure",
        }
    }
}
