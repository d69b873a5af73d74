//! In-memory verification record store
//!
//! A single mutex-guarded map keyed by email. Every operation takes the lock
//! exactly once, so each call is atomic relative to the others and the lock
//! is never held across an `.await`.
//!
//! Expired records are not swept; they stay until overwritten or consumed.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;
use uuid::Uuid;
use vt_core::domain::entities::VerificationRecord;
use vt_core::services::verification::CodeStoreTrait;
use vt_shared::utils::mask_email;

/// Process-lifetime record table
#[derive(Debug, Default)]
pub struct InMemoryCodeStore {
    records: Mutex<HashMap<String, VerificationRecord>>,
}

impl InMemoryCodeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held, expired ones included
    pub fn len(&self) -> usize {
        self.lock().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, VerificationRecord>>, String> {
        self.records
            .lock()
            .map_err(|_| "verification record store lock poisoned".to_string())
    }
}

#[async_trait]
impl CodeStoreTrait for InMemoryCodeStore {
    async fn put(&self, record: VerificationRecord) -> Result<(), String> {
        let mut records = self.lock()?;
        let replaced = records.insert(record.email.clone(), record);
        if let Some(previous) = replaced {
            debug!(
                email = %mask_email(&previous.email),
                replaced_id = %previous.id,
                "Replaced pending verification record"
            );
        }
        Ok(())
    }

    async fn get(&self, email: &str) -> Result<Option<VerificationRecord>, String> {
        Ok(self.lock()?.get(email).cloned())
    }

    async fn remove_if_current(&self, email: &str, id: Uuid) -> Result<bool, String> {
        let mut records = self.lock()?;
        match records.get(email) {
            Some(record) if record.id == id => {
                records.remove(email);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
