//! Backend Error Module
//!
//! Error types returned by the favorites handlers and their conversion into
//! HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! Soft outcomes (already favorited, nothing to delete) are not errors; they
//! are 200 responses built in `favorites::handlers::reply`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::BackendError;
