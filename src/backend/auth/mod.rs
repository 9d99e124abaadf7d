//! Authentication Module
//!
//! Identity for the favorites API comes from bearer JWTs issued by the
//! account service. This module only verifies them; signup and login live
//! elsewhere.
//!
//! # Authentication Flow
//!
//! 1. The client sends `Authorization: Bearer <token>`
//! 2. `middleware::auth` verifies the token with the configured secret
//! 3. The user id in `sub` is checked against the store
//! 4. Handlers receive the caller through the `AuthUser` extractor

/// JWT token generation and validation
pub mod sessions;

pub use sessions::{create_token, verify_token, Claims};
