//! Domain-specific error types and error handling.

mod types;


pub use types::VerificationError;

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Verification(#[from] VerificationError),
}

impl DomainError {
    /// Whether the caller can recover by requesting a new code and retrying
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DomainError::Verification(_) | DomainError::Validation { .. })
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
