//! Backend Module
//!
//! This module contains the HTTP server for the campsite favorites API.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Route table and router assembly
//! - **`favorites`** - Storage backends and request handlers
//! - **`auth`** - JWT verification
//! - **`middleware`** - Authentication and CORS layers
//! - **`error`** - Backend error type and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - favorites-server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── favorites/      - Store and handlers
//! ├── auth/           - Token verification
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the favorites store handle and the configuration. It
//! is created once at startup and cloned into every handler; there is no
//! other shared mutable state.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`. Storage failures are always
//! propagated and rendered as JSON error responses. No-op outcomes are
//! 200 plain-text notices, not errors.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Favorites storage and handlers
pub mod favorites;

/// Backend error types
pub mod error;

/// Token verification
pub mod auth;

/// Middleware for request processing
pub mod middleware;

pub use error::BackendError;
pub use favorites::{FavoritesStore, InMemoryFavoritesStore, PostgresFavoritesStore};
pub use server::{create_app, create_app_with_store, AppState, ServerConfig};
