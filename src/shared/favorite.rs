/**
 * Favorites Record
 *
 * This module defines the per-user favorites document and the operations
 * that mutate it. The record is shared by every storage backend and is the
 * JSON body returned by the favorites endpoints.
 *
 * # Set Semantics
 *
 * `campsites` is an ordered list that behaves as a set: every operation in
 * this module keeps each campsite identifier at most once, and removals keep
 * the relative order of the remaining entries.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Identifier of a campsite managed by the campsite catalog
///
/// Identifiers are opaque strings. They are not checked against the catalog;
/// the only requirement is that they are not blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampsiteId(String);

impl CampsiteId {
    /// Create a campsite identifier, rejecting blank input
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// ```rust
    /// use campsite_favorites::shared::CampsiteId;
    ///
    /// let id = CampsiteId::parse(" c1 ").unwrap();
    /// assert_eq!(id.as_str(), "c1");
    /// assert!(CampsiteId::parse("   ").is_err());
    /// ```
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, SharedError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(SharedError::validation(
                "campsiteId",
                "Campsite id cannot be empty",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl fmt::Display for CampsiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CampsiteId {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// How a batch add treats identifiers that are already favorited
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulkAddPolicy {
    /// Refuse the whole batch when any identifier is already present
    #[default]
    Reject,
    /// Append the new identifiers and ignore the ones already present
    Skip,
}

impl FromStr for BulkAddPolicy {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "skip" => Ok(Self::Skip),
            other => Err(SharedError::validation(
                "bulk_add_policy",
                format!("unknown policy '{}', expected 'reject' or 'skip'", other),
            )),
        }
    }
}

/// Result of adding a single campsite
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

/// Result of removing a single campsite
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The campsite was removed from this position
    Removed(usize),
    NotPresent,
}

/// Result of a batch add
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkAddOutcome {
    /// These identifiers were appended, in request order
    Added(Vec<CampsiteId>),
    /// The batch was refused because this identifier is already favorited
    Rejected(CampsiteId),
}

impl BulkAddOutcome {
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Added(added) if !added.is_empty())
    }
}

/// The single favorites document held for a user
///
/// Serialized with camelCase keys; the owner is exposed as `user` so that
/// clients of the campsite API see the field name they already know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesRecord {
    pub id: Uuid,
    #[serde(rename = "user")]
    pub owner: Uuid,
    pub campsites: Vec<CampsiteId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FavoritesRecord {
    /// Create an empty record for `owner`
    pub fn new(owner: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner,
            campsites: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn contains(&self, campsite: &CampsiteId) -> bool {
        self.campsites.iter().any(|c| c == campsite)
    }

    /// Append `campsite` unless it is already favorited
    pub fn add_campsite(&mut self, campsite: CampsiteId) -> AddOutcome {
        if self.contains(&campsite) {
            return AddOutcome::AlreadyPresent;
        }
        self.campsites.push(campsite);
        self.touch();
        AddOutcome::Added
    }

    /// Remove exactly the entry equal to `campsite`, keeping the order of the rest
    pub fn remove_campsite(&mut self, campsite: &CampsiteId) -> RemoveOutcome {
        match self.campsites.iter().position(|c| c == campsite) {
            Some(index) => {
                self.campsites.remove(index);
                self.touch();
                RemoveOutcome::Removed(index)
            }
            None => RemoveOutcome::NotPresent,
        }
    }

    /// Add a batch of campsites according to `policy`
    ///
    /// Identifiers repeated inside `batch` are collapsed to their first
    /// occurrence. With [`BulkAddPolicy::Reject`] nothing is appended when any
    /// identifier is already favorited.
    pub fn add_campsites(&mut self, batch: Vec<CampsiteId>, policy: BulkAddPolicy) -> BulkAddOutcome {
        let batch = dedup_preserving_order(batch);

        if policy == BulkAddPolicy::Reject {
            if let Some(existing) = batch.iter().find(|c| self.contains(c)) {
                return BulkAddOutcome::Rejected(existing.clone());
            }
        }

        let mut added = Vec::new();
        for campsite in batch {
            if self.add_campsite(campsite.clone()) == AddOutcome::Added {
                added.push(campsite);
            }
        }
        BulkAddOutcome::Added(added)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn dedup_preserving_order(batch: Vec<CampsiteId>) -> Vec<CampsiteId> {
    let mut unique: Vec<CampsiteId> = Vec::with_capacity(batch.len());
    for campsite in batch {
        if !unique.contains(&campsite) {
            unique.push(campsite);
        }
    }
    unique
}

/// One entry of a bulk-add request body
///
/// Clients send either bare identifiers (`["c1"]`) or campsite documents
/// carrying an `_id` (`[{"_id": "c1"}]`).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum CampsiteRef {
    Id(String),
    Document {
        #[serde(rename = "_id")]
        id: String,
    },
}

impl CampsiteRef {
    pub fn raw_id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Document { id } => id,
        }
    }
}

/// Validate a bulk-add body into campsite identifiers
pub fn parse_campsite_refs(refs: &[CampsiteRef]) -> Result<Vec<CampsiteId>, SharedError> {
    if refs.is_empty() {
        return Err(SharedError::validation(
            "campsites",
            "Request body must list at least one campsite",
        ));
    }
    refs.iter().map(|r| CampsiteId::parse(r.raw_id())).collect()
}
