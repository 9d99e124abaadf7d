/**
 * Backend Error Types
 *
 * This module defines the error type returned by the favorites handlers.
 * Every variant maps to an HTTP status code and is rendered as a JSON body
 * by the `IntoResponse` implementation in `conversion`.
 *
 * # Error Categories
 *
 * ## Store Errors
 *
 * Failures reported by the favorites storage backend. They are always
 * surfaced as error responses rather than swallowed by the handler.
 *
 * ## Validation Errors
 *
 * Malformed client input (blank campsite ids, empty bulk-add body), carried
 * by `SharedError`.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::favorites::store::StoreError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use axum::http::StatusCode;
/// use campsite_favorites::backend::error::BackendError;
/// use campsite_favorites::shared::SharedError;
///
/// let err = BackendError::from(SharedError::validation("campsiteId", "Campsite id cannot be empty"));
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Favorites storage error
    ///
    /// Raised by any store call made while handling a request.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Invalid client input
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Store(UnknownRecord)` - 409 Conflict (record deleted mid-request)
    /// - `Store(_)` - 500 Internal Server Error
    /// - `SharedError` - 400 Bad Request
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Store(StoreError::UnknownRecord { .. }) => StatusCode::CONFLICT,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(SharedError::ValidationError { .. }) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error message shown to clients
    ///
    /// Database details stay in the server log.
    pub fn message(&self) -> String {
        match self {
            Self::Store(StoreError::Database(_)) => "Favorites storage is unavailable".to_string(),
            Self::Store(err) => err.to_string(),
            Self::SharedError(err) => err.to_string(),
        }
    }
}
