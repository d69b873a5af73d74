//! Service configuration assembled from the environment

use thiserror::Error;
use vt_core::services::verification::VerificationServiceConfig;
use vt_infra::config::InfrastructureConfig;
use vt_infra::InfrastructureError;
use vt_shared::config::{AppConfig, Environment};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub verification: VerificationServiceConfig,
    pub infra: InfrastructureConfig,
}

impl Config {
    /// Load every section from environment variables
    ///
    /// The environment-specific file (e.g. `.env.production`) is read first,
    /// then `.env`; variables already set are never overwritten.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::from_filename(Environment::from_env().env_file()).ok();
        dotenvy::dotenv().ok();

        Ok(Config {
            app: AppConfig::from_env(),
            verification: VerificationServiceConfig::from_env(),
            infra: InfrastructureConfig::from_env()?,
        })
    }

    pub fn bind_address(&self) -> String {
        self.app.server.bind_address()
    }
}
