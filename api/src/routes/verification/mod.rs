//! Verification route handlers
//!
//! - `POST /send-code` issues and emails a one-time code
//! - `POST /verify-code` checks a submitted code and returns an access token

pub mod send_code;
pub mod verify_code;

use std::sync::Arc;

use vt_core::services::verification::{
    ClockTrait, CodeStoreTrait, MessageDeliveryTrait, TokenIssuerTrait, VerificationService,
};

/// Application state that holds shared services
pub struct AppState<S, D, C, T>
where
    S: CodeStoreTrait,
    D: MessageDeliveryTrait,
    C: ClockTrait,
    T: TokenIssuerTrait,
{
    pub verification_service: Arc<VerificationService<S, D, C, T>>,
}

impl<S, D, C, T> AppState<S, D, C, T>
where
    S: CodeStoreTrait,
    D: MessageDeliveryTrait,
    C: ClockTrait,
    T: TokenIssuerTrait,
{
    pub fn new(verification_service: Arc<VerificationService<S, D, C, T>>) -> Self {
        Self {
            verification_service,
        }
    }
}
