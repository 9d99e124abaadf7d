//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs              - Module exports and documentation
//! ├── router.rs           - Main router creation
//! └── favorite_routes.rs  - `/favorites` resources
//! ```
//!
//! # Routes
//!
//! - `GET /health` - Liveness check
//! - `/favorites` - Collection: list, bulk add, delete all
//! - `/favorites/{campsite_id}` - Item: add one, remove one

/// Main router creation
pub mod router;

/// Favorites route table
pub mod favorite_routes;

pub use router::create_router;
