//! # VehicleTracker Core
//!
//! Core business logic and domain layer for the VehicleTracker verification service.
//! This crate contains the verification record entity, the verification service,
//! the collaborator traits it is built on, and the domain error types.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
