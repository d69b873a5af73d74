//! Verification record entity for email-based driver login.

use chrono::{DateTime, Duration, Utc};
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Smallest code that can be issued
pub const CODE_MIN: u32 = 100_000;

/// Largest code that can be issued
pub const CODE_MAX: u32 = 999_999;

/// Default lifetime of a verification code (5 minutes)
pub const DEFAULT_CODE_TTL_SECONDS: i64 = 300;

/// Longest accepted code lifetime (1 day)
pub const MAX_CODE_TTL_SECONDS: i64 = 86_400;

/// A pending one-time code issued to an email address
///
/// Records are never mutated after issuance. A new request for the same
/// email replaces the record wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Identifies this issuance; used to remove a record only if it is still current
    pub id: Uuid,

    /// Email address the code was issued to
    pub email: String,

    /// The 6-digit verification code
    pub code: String,

    /// Timestamp when the code was issued
    pub created_at: DateTime<Utc>,

    /// Timestamp from which the code is no longer accepted
    pub expires_at: DateTime<Utc>,
}

impl VerificationRecord {
    /// Issues a record with a freshly generated code
    ///
    /// # Arguments
    ///
    /// * `email` - The address the code is issued to
    /// * `issued_at` - Issuance time
    /// * `ttl_seconds` - Lifetime of the code
    pub fn issue(email: impl Into<String>, issued_at: DateTime<Utc>, ttl_seconds: i64) -> Self {
        Self::with_code(email, Self::generate_code(), issued_at, ttl_seconds)
    }

    /// Builds a record around a known code
    pub fn with_code(
        email: impl Into<String>,
        code: impl Into<String>,
        issued_at: DateTime<Utc>,
        ttl_seconds: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            code: code.into(),
            created_at: issued_at,
            expires_at: issued_at + Duration::seconds(ttl_seconds),
        }
    }

    /// Generates a uniformly random code in `CODE_MIN..=CODE_MAX` using the OS CSPRNG
    pub fn generate_code() -> String {
        let mut rng = OsRng;
        let code: u32 = rng.gen_range(CODE_MIN..=CODE_MAX);
        code.to_string()
    }

    /// Checks if the code has expired at `now`
    ///
    /// A code is expired from `expires_at` onward, inclusive.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
