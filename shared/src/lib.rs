//! Shared types for the intake station
//!
//! Domain models, error types, and utility helpers used by the station core
//! and by any shell embedding it. This crate stays free of storage and
//! device dependencies so sync tooling can reuse the same types.

pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use error::{RegistrationError, RegistrationResult};
pub use models::{ProductField, ProductRecord, RegionCode};
pub use types::Timestamp;
