//! Business services containing domain logic and use cases.

pub mod verification;

// Re-export commonly used types
pub use verification::{
    ClockTrait, CodeStoreTrait, MessageDeliveryTrait, SendCodeResult, TokenIssuerTrait,
    VerificationService, VerificationServiceConfig, VerifyCodeResult,
};
