//! Shared utilities and common types for the VehicleTracker server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types (server, CORS, environment, logging)
//! - Response structures
//! - Utility functions (email masking and normalization)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, CorsConfig, Environment, LoggingConfig, ServerConfig};
pub use types::{ErrorResponse, HealthResponse, HealthStatus};
pub use utils::email;
