//! Resolved entities referenced by a favorites record
//!
//! A stored record only holds identifiers. Listing favorites resolves them
//! into the user and campsite documents below before serialization.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::favorite::{CampsiteId, FavoritesRecord};
use chrono::{DateTime, Utc};

/// Public view of a user (no credentials)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

/// A campsite from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campsite {
    pub id: CampsiteId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub elevation: i32,
    pub cost: f64,
    pub featured: bool,
}

/// A favorites record with its references resolved
///
/// `user` is `null` when the owner no longer exists; campsites that no
/// longer resolve are left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedFavorites {
    pub id: Uuid,
    pub user: Option<UserSummary>,
    pub campsites: Vec<Campsite>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PopulatedFavorites {
    /// Join `record` with already-fetched entities, keeping record order
    pub fn resolve(
        record: &FavoritesRecord,
        user: Option<UserSummary>,
        mut campsites: Vec<Campsite>,
    ) -> Self {
        let ordered = record
            .campsites
            .iter()
            .filter_map(|id| {
                campsites
                    .iter()
                    .position(|c| &c.id == id)
                    .map(|pos| campsites.swap_remove(pos))
            })
            .collect();

        Self {
            id: record.id,
            user,
            campsites: ordered,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
