//! Middleware Module
//!
//! Request processing that runs before the favorites handlers:
//!
//! - **`auth`** - bearer-token authentication for protected routes
//! - **`cors`** - the open and allowlisted CORS policies

pub mod auth;

pub mod cors;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
