//! HTTP handlers for the favorites resources.
//!
//! - **`collection`** - `/favorites`: list, bulk add, delete all
//! - **`item`** - `/favorites/{campsite_id}`: add one, remove one
//! - **`reply`** - JSON/notice responses and the 403/OPTIONS handlers
//!
//! Every handler reads the caller from [`AuthUser`](crate::backend::middleware::AuthUser)
//! and propagates storage failures as [`BackendError`](crate::backend::error::BackendError).

pub mod collection;
pub mod item;
pub mod reply;

pub use collection::{add_favorites, delete_favorites, list_favorites};
pub use item::{add_favorite, remove_favorite};
pub use reply::{preflight, unsupported, FavoritesReply, Notice};
