//! Traits for store, delivery, clock and token issuer integration

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::VerificationRecord;

/// Trait for the verification record store
///
/// Each method must be atomic with respect to the others for the same email.
#[async_trait]
pub trait CodeStoreTrait: Send + Sync {
    /// Store a record, replacing any existing record for the same email
    async fn put(&self, record: VerificationRecord) -> Result<(), String>;
    /// Get the current record for an email
    async fn get(&self, email: &str) -> Result<Option<VerificationRecord>, String>;
    /// Remove the record for an email only if it still carries `id`
    ///
    /// Returns `true` if a record was removed.
    async fn remove_if_current(&self, email: &str, id: Uuid) -> Result<bool, String>;
}

/// Trait for the out-of-band delivery channel
#[async_trait]
pub trait MessageDeliveryTrait: Send + Sync {
    /// Send a message and return the provider's message id
    async fn send_message(&self, recipient: &str, subject: &str, body: &str)
        -> Result<String, String>;
}

/// Source of the current time
pub trait ClockTrait: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Trait for minting the credential handed out after a successful verification
#[async_trait]
pub trait TokenIssuerTrait: Send + Sync {
    async fn issue_token(&self, email: &str) -> Result<String, String>;
}
