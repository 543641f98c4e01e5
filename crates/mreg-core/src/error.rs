//! # Core Error Types
//!
//! The error hierarchy shared by the foundational types. Uses `thiserror`
//! for derive-based `Display` and `Error` implementations.

use thiserror::Error;

/// Errors from the foundational types.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A value failed shape or range validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
