/**
 * Favorites Storage
 *
 * This module defines the persistence interface used by the favorites
 * handlers and the `FavoritesStore` handle that wraps a concrete backend.
 *
 * # Backends
 *
 * - `PostgresFavoritesStore` - sqlx/Postgres, used when `DATABASE_URL` is set
 * - `InMemoryFavoritesStore` - process-local map, used for tests and local development
 *
 * # Consistency
 *
 * Backends guarantee at most one record per owner. Updates are whole-document
 * writes with no version check, so two concurrent read-modify-write sequences
 * for the same user resolve as last-write-wins.
 */
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::shared::{Campsite, CampsiteId, FavoritesRecord, PopulatedFavorites, UserSummary};

/// Errors returned by a favorites storage backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record already exists for this owner
    #[error("a favorites record already exists for user {owner}")]
    DuplicateOwner { owner: Uuid },

    /// The record being saved no longer exists
    #[error("favorites record {id} does not exist")]
    UnknownRecord { id: Uuid },

    /// The underlying database failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// The operations a favorites backend must provide
#[async_trait::async_trait]
pub trait FavoritesStorageBackend: std::fmt::Debug + Send + Sync {
    /// Load the record owned by `owner`, if any
    async fn find_by_owner(&self, owner: Uuid) -> Result<Option<FavoritesRecord>, StoreError>;

    /// Insert an empty record for `owner`
    ///
    /// Fails with [`StoreError::DuplicateOwner`] when the owner already has one.
    async fn create(&self, owner: Uuid) -> Result<FavoritesRecord, StoreError>;

    /// Overwrite the stored campsites of an existing record
    async fn save(&self, record: &FavoritesRecord) -> Result<FavoritesRecord, StoreError>;

    /// Remove the record owned by `owner`, returning it if it existed
    async fn delete_by_owner(&self, owner: Uuid) -> Result<Option<FavoritesRecord>, StoreError>;

    /// Look up the public profile of a user
    async fn find_user(&self, id: Uuid) -> Result<Option<UserSummary>, StoreError>;

    /// Look up the campsites matching `ids`; unknown ids are ignored
    async fn find_campsites(&self, ids: &[CampsiteId]) -> Result<Vec<Campsite>, StoreError>;
}

/// Shared handle to the configured favorites backend
#[derive(Debug, Clone)]
pub struct FavoritesStore(Arc<dyn FavoritesStorageBackend>);

impl FavoritesStore {
    pub fn new<Backend>(backend: Backend) -> Self
    where
        Backend: FavoritesStorageBackend + 'static,
    {
        Self(Arc::new(backend))
    }

    pub async fn find_by_owner(&self, owner: Uuid) -> Result<Option<FavoritesRecord>, StoreError> {
        self.0.find_by_owner(owner).await
    }

    pub async fn create(&self, owner: Uuid) -> Result<FavoritesRecord, StoreError> {
        self.0.create(owner).await
    }

    pub async fn save(&self, record: &FavoritesRecord) -> Result<FavoritesRecord, StoreError> {
        self.0.save(record).await
    }

    pub async fn delete_by_owner(&self, owner: Uuid) -> Result<Option<FavoritesRecord>, StoreError> {
        self.0.delete_by_owner(owner).await
    }

    pub async fn find_user(&self, id: Uuid) -> Result<Option<UserSummary>, StoreError> {
        self.0.find_user(id).await
    }

    /// Load the owner's record, creating an empty one on first use
    ///
    /// Returns the record and whether it was created by this call. Losing a
    /// creation race to a concurrent request re-reads the winner's record.
    #[tracing::instrument(name = "Find or create favorites record", level = tracing::Level::DEBUG, skip(self))]
    pub async fn find_or_create(&self, owner: Uuid) -> Result<(FavoritesRecord, bool), StoreError> {
        if let Some(record) = self.0.find_by_owner(owner).await? {
            return Ok((record, false));
        }

        match self.0.create(owner).await {
            Ok(record) => {
                tracing::info!(%owner, record_id = %record.id, "Created favorites record");
                Ok((record, true))
            }
            Err(StoreError::DuplicateOwner { .. }) => {
                tracing::debug!(%owner, "Favorites record created concurrently, reloading");
                let record = self
                    .0
                    .find_by_owner(owner)
                    .await?
                    .ok_or(StoreError::DuplicateOwner { owner })?;
                Ok((record, false))
            }
            Err(e) => Err(e),
        }
    }

    /// Resolve the user and campsite references of `record`
    pub async fn populate(&self, record: &FavoritesRecord) -> Result<PopulatedFavorites, StoreError> {
        let user = self.0.find_user(record.owner).await?;
        let campsites = if record.campsites.is_empty() {
            Vec::new()
        } else {
            self.0.find_campsites(&record.campsites).await?
        };
        Ok(PopulatedFavorites::resolve(record, user, campsites))
    }
}
