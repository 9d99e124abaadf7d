//! Shared Module
//!
//! Types that do not depend on the HTTP server: the favorites record and its
//! operations, the resolved catalog entities returned by listings, and the
//! validation errors raised while parsing client input.

/// Favorites record and campsite identifiers
pub mod favorite;

/// Resolved users and campsites
pub mod catalog;

/// Shared error types
pub mod error;

pub use catalog::{Campsite, PopulatedFavorites, UserSummary};
pub use error::SharedError;
pub use favorite::{
    parse_campsite_refs, AddOutcome, BulkAddOutcome, BulkAddPolicy, CampsiteId, CampsiteRef,
    FavoritesRecord, RemoveOutcome,
};
