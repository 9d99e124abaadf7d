//! Shared Error Types
//!
//! Failures that are independent of the HTTP layer: invalid campsite
//! references and malformed bulk-add bodies.
//!
//! # Usage
//!
//! ```rust
//! use campsite_favorites::shared::SharedError;
//!
//! let error = SharedError::validation("campsiteId", "Campsite id cannot be empty");
//! assert!(error.to_string().contains("campsiteId"));
//! ```
use thiserror::Error;

/// Errors raised while validating favorites input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
