//! Types for verification service results

use chrono::{DateTime, Utc};

/// Result of sending a verification code
///
/// The code itself is deliberately absent; it only travels through the delivery channel.
#[derive(Debug, Clone)]
pub struct SendCodeResult {
    /// The message ID from the delivery provider
    pub message_id: String,
    /// When the issued code stops being accepted
    pub expires_at: DateTime<Utc>,
}

/// Result of a successful verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyCodeResult {
    /// Always `true`; failures are reported as errors
    pub success: bool,
    /// Opaque access token for the verified email
    pub token: String,
}
