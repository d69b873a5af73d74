//! Type definitions shared by the HTTP surface
//!
//! - `response` - Error and health response bodies

pub mod response;

pub use response::{ErrorResponse, HealthResponse, HealthStatus};
