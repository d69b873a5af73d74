//! Token issuing
//!
//! The token handed out after a successful verification carries no
//! cryptographic meaning; minting a real credential belongs to an
//! external identity service.

use async_trait::async_trait;
use vt_core::services::verification::TokenIssuerTrait;
use vt_shared::utils::mask_email;

use crate::config::TokenConfig;

/// Issues the same configured token for every verified email
#[derive(Debug, Clone)]
pub struct StaticTokenIssuer {
    token: String,
}

impl StaticTokenIssuer {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn from_config(config: &TokenConfig) -> Self {
        Self::new(config.static_token.clone())
    }
}

#[async_trait]
impl TokenIssuerTrait for StaticTokenIssuer {
    async fn issue_token(&self, email: &str) -> Result<String, String> {
        tracing::debug!(email = %mask_email(email), "Issuing static access token");
        Ok(self.token.clone())
    }
}
