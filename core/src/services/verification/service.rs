//! Main verification service implementation

use constant_time_eq::constant_time_eq;
use std::sync::Arc;
use vt_shared::utils::mask_email;

use crate::domain::entities::VerificationRecord;
use crate::errors::{DomainError, DomainResult, VerificationError};

use super::config::VerificationServiceConfig;
use super::traits::{ClockTrait, CodeStoreTrait, MessageDeliveryTrait, TokenIssuerTrait};
use super::types::{SendCodeResult, VerifyCodeResult};

/// Verification service for issuing and checking one-time email codes
///
/// Owns no state of its own: records live in the injected store, which is
/// shared with every request handler through the service's `Arc`s.
pub struct VerificationService<S, D, C, T>
where
    S: CodeStoreTrait,
    D: MessageDeliveryTrait,
    C: ClockTrait,
    T: TokenIssuerTrait,
{
    /// Store holding at most one pending record per email
    store: Arc<S>,
    /// Channel used to deliver codes
    delivery: Arc<D>,
    /// Time source for issuance and expiry checks
    clock: Arc<C>,
    /// Mints the token returned on success
    token_issuer: Arc<T>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<S, D, C, T> VerificationService<S, D, C, T>
where
    S: CodeStoreTrait,
    D: MessageDeliveryTrait,
    C: ClockTrait,
    T: TokenIssuerTrait,
{
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `store` - Record store implementation
    /// * `delivery` - Delivery channel implementation
    /// * `clock` - Time source
    /// * `token_issuer` - Token issuer implementation
    /// * `config` - Service configuration
    pub fn new(
        store: Arc<S>,
        delivery: Arc<D>,
        clock: Arc<C>,
        token_issuer: Arc<T>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            store,
            delivery,
            clock,
            token_issuer,
            config,
        }
    }

    /// Service configuration
    pub fn config(&self) -> &VerificationServiceConfig {
        &self.config
    }

    /// Issue a new code for an email and deliver it
    ///
    /// This method:
    /// 1. Generates a new 6-digit code
    /// 2. Stores it, replacing any pending code for the same email
    /// 3. Sends it through the delivery channel
    /// 4. Rolls the record back if delivery fails
    ///
    /// # Returns
    ///
    /// * `Ok(SendCodeResult)` - Delivery message id and expiry; never the code
    /// * `Err(DomainError)` - `DeliveryFailure` if sending failed, `Internal` on store errors
    pub async fn request_code(&self, email: &str) -> DomainResult<SendCodeResult> {
        let masked = mask_email(email);
        let record = VerificationRecord::issue(
            email,
            self.clock.now(),
            self.config.effective_ttl_seconds(),
        );
        let record_id = record.id;
        let expires_at = record.expires_at;
        let subject = self.config.subject();
        let body = self.config.body(&record.code);

        self.store.put(record).await.map_err(|e| {
            tracing::error!(
                email = %masked,
                error = %e,
                event = "code_storage_failed",
                "Failed to store verification code"
            );
            DomainError::Internal {
                message: format!("Failed to store verification code: {}", e),
            }
        })?;

        tracing::info!(
            email = %masked,
            event = "code_issued",
            record_id = %record_id,
            expires_at = %expires_at,
            "Issued new verification code"
        );

        match self.delivery.send_message(email, &subject, &body).await {
            Ok(message_id) => {
                tracing::info!(
                    email = %masked,
                    event = "code_delivered",
                    message_id = %message_id,
                    "Verification code delivered"
                );
                Ok(SendCodeResult {
                    message_id,
                    expires_at,
                })
            }
            Err(reason) => {
                tracing::error!(
                    email = %masked,
                    error = %reason,
                    event = "code_delivery_failed",
                    "Failed to deliver verification code, rolling back"
                );
                // Only our own issuance is removed; a concurrent newer request keeps its record.
                if let Err(e) = self.store.remove_if_current(email, record_id).await {
                    tracing::warn!(
                        email = %masked,
                        error = %e,
                        event = "code_rollback_failed",
                        "Failed to roll back undelivered verification code"
                    );
                }
                Err(VerificationError::DeliveryFailure { reason }.into())
            }
        }
    }

    /// Verify a submitted code for an email
    ///
    /// Checks run in order and the first failure wins:
    /// 1. No pending record: `NotFound`
    /// 2. Record expired: `Expired`
    /// 3. Code mismatch: `Invalid`
    ///
    /// Failed attempts leave the record untouched. On success the record is
    /// removed and a token is issued.
    pub async fn verify_code(&self, email: &str, code: &str) -> DomainResult<VerifyCodeResult> {
        let masked = mask_email(email);

        let record = self
            .store
            .get(email)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to read verification code: {}", e),
            })?
            .ok_or_else(|| {
                tracing::warn!(email = %masked, event = "code_not_found", "No pending verification code");
                VerificationError::NotFound
            })?;

        if record.is_expired_at(self.clock.now()) {
            tracing::warn!(
                email = %masked,
                event = "code_expired",
                record_id = %record.id,
                "Verification code expired"
            );
            return Err(VerificationError::Expired.into());
        }

        if !Self::codes_match(&record.code, code) {
            tracing::warn!(
                email = %masked,
                event = "code_mismatch",
                record_id = %record.id,
                "Verification code did not match"
            );
            return Err(VerificationError::Invalid.into());
        }

        let consumed = self
            .store
            .remove_if_current(email, record.id)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to consume verification code: {}", e),
            })?;
        if !consumed {
            // Superseded between read and remove: the submitted code belonged to a stale issuance.
            tracing::warn!(
                email = %masked,
                event = "code_superseded",
                record_id = %record.id,
                "Verification code was replaced during verification"
            );
            return Err(VerificationError::Invalid.into());
        }

        let token = self
            .token_issuer
            .issue_token(email)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to issue token: {}", e),
            })?;

        tracing::info!(
            email = %masked,
            event = "code_verified",
            record_id = %record.id,
            "Verification code successfully verified"
        );

        Ok(VerifyCodeResult {
            success: true,
            token,
        })
    }

    /// Exact comparison in constant time
    fn codes_match(stored: &str, submitted: &str) -> bool {
        stored.len() == submitted.len() && constant_time_eq(stored.as_bytes(), submitted.as_bytes())
    }
}
