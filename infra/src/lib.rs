//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators the verification service
//! depends on:
//! - **Store**: process-lifetime, mutex-guarded record table
//! - **Email**: SMTP delivery via lettre, plus a mock for development
//! - **Clock**: system time
//! - **Token**: static placeholder token issuer

// Re-export core types for convenience
pub use vt_core::errors::*;

/// Configuration module for infrastructure services
pub mod config;

/// Email delivery module - SMTP and mock providers
pub mod email;

/// Record store module - In-memory verification record table
pub mod store;

/// System clock
pub mod clock;

/// Token issuing
pub mod token;

pub use clock::SystemClock;
pub use config::{EmailConfig, InfrastructureConfig, TokenConfig};
pub use email::{
    create_email_service, CapturedEmail, EmailDeliveryAdapter, EmailService, MockEmailService,
};
pub use store::InMemoryCodeStore;
pub use token::StaticTokenIssuer;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Email sending error
    #[error("Email error: {0}")]
    Email(String),

    /// Invalid sender or recipient address
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// Message could not be built
    #[error("Failed to build email message: {0}")]
    Message(#[from] lettre::error::Error),

    /// SMTP transport error
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
