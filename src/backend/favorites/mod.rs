//! Favorites Module
//!
//! Everything behind `/favorites`: the storage interface and its backends,
//! and the HTTP handlers that drive them.
//!
//! # Module Structure
//!
//! ```text
//! favorites/
//! ├── mod.rs       - Module exports and documentation
//! ├── store.rs     - Storage trait, StoreError and the FavoritesStore handle
//! ├── memory.rs    - In-memory backend
//! ├── postgres.rs  - sqlx/Postgres backend
//! └── handlers/    - Collection and item handlers
//! ```
//!
//! # Request Flow
//!
//! Each mutating request is a read-modify-write: load (or lazily create)
//! the caller's record, apply the operation from `shared::favorite`, then
//! save the whole record.

pub mod handlers;
pub mod memory;
pub mod postgres;
pub mod store;

pub use memory::InMemoryFavoritesStore;
pub use postgres::PostgresFavoritesStore;
pub use store::{FavoritesStorageBackend, FavoritesStore, StoreError};
