//! Error types for the registration workflow
//!
//! Two kinds only: a submit with empty fields, and a record-store fault.
//! Each maps to a fixed user-facing notification.

use thiserror::Error;

use crate::models::ProductField;

/// Unified error type for the registration workflow.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// One or more required fields were empty at submit time.
    ///
    /// Recovered locally: the user corrects the input and resubmits.
    /// Storage is never touched.
    #[error("required fields missing: {missing:?}")]
    Validation { missing: Vec<ProductField> },

    /// The record store read, decode, or write failed.
    ///
    /// No automatic retry; a manual resubmit re-attempts the full
    /// read-modify-write.
    #[error("record store failure: {source}")]
    Persistence {
        #[source]
        source: anyhow::Error,
    },
}

impl RegistrationError {
    // ========== Convenient constructors ==========

    /// Create a Validation error from the missing fields.
    pub fn validation(missing: Vec<ProductField>) -> Self {
        Self::Validation { missing }
    }

    /// Create a Persistence error from a collaborator fault.
    pub fn persistence(source: impl Into<anyhow::Error>) -> Self {
        Self::Persistence {
            source: source.into(),
        }
    }

    // ========== User-facing notification mapping ==========

    /// Title of the blocking notification shown for this error.
    pub fn user_title(&self) -> &'static str {
        "Error"
    }

    /// Body of the blocking notification shown for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "Please fill in all fields.",
            Self::Persistence { .. } => "Could not save the product.",
        }
    }
}

/// Result type for registration operations
pub type RegistrationResult<T> = Result<T, RegistrationError>;
