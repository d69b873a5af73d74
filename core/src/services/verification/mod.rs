//! Verification service module for email-based driver login
//!
//! This module provides the one-time code workflow:
//! - Code generation, storage and delivery by email
//! - Single-use verification with lazy expiry
//! - Collaborator traits for the record store, delivery channel, clock and token issuer

mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::VerificationServiceConfig;
pub use service::VerificationService;
pub use traits::{ClockTrait, CodeStoreTrait, MessageDeliveryTrait, TokenIssuerTrait};
pub use types::{SendCodeResult, VerifyCodeResult};
