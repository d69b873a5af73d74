//! Verification record store
//!
//! Records live for the lifetime of the process only.

pub mod in_memory;


pub use in_memory::InMemoryCodeStore;
