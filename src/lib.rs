//! Campsite Favorites - Main Library
//!
//! An HTTP service that keeps each user's list of favorite campsites.
//!
//! # Module Structure
//!
//! - **`shared`** - The favorites record, campsite identifiers, resolved
//!   catalog entities and validation errors. No HTTP dependencies.
//! - **`backend`** - The Axum server: configuration, storage backends
//!   (Postgres and in-memory), authentication, CORS and handlers.
//!
//! # Usage
//!
//! ```rust,no_run
//! use campsite_favorites::backend::server::{create_app, load_config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let app = create_app(config).await;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Types shared by the backend and its clients
pub mod shared;

/// Axum HTTP server
pub mod backend;
