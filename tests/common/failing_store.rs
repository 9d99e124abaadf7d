//! Storage backend that fails on purpose
//!
//! Authentication still succeeds for the one user it knows, so requests reach
//! the handlers and the failure surfaces from the favorites calls.

use campsite_favorites::backend::favorites::{FavoritesStorageBackend, StoreError};
use campsite_favorites::shared::{Campsite, CampsiteId, FavoritesRecord, UserSummary};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// Every favorites query fails as if the pool were exhausted
    Database,
    /// The record loads fine but is gone by the time it is saved
    RecordVanished,
}

#[derive(Debug)]
pub struct FailingStore {
    pub user: UserSummary,
    pub failure: Failure,
}

impl FailingStore {
    pub fn new(user: UserSummary, failure: Failure) -> Self {
        Self { user, failure }
    }

    fn fail(&self) -> StoreError {
        StoreError::Database(sqlx::Error::PoolTimedOut)
    }
}

#[async_trait::async_trait]
impl FavoritesStorageBackend for FailingStore {
    async fn find_by_owner(&self, owner: Uuid) -> Result<Option<FavoritesRecord>, StoreError> {
        match self.failure {
            Failure::Database => Err(self.fail()),
            Failure::RecordVanished => {
                let mut record = FavoritesRecord::new(owner);
                record.add_campsite(CampsiteId::parse("c1").unwrap());
                Ok(Some(record))
            }
        }
    }

    async fn create(&self, _owner: Uuid) -> Result<FavoritesRecord, StoreError> {
        Err(self.fail())
    }

    async fn save(&self, record: &FavoritesRecord) -> Result<FavoritesRecord, StoreError> {
        match self.failure {
            Failure::Database => Err(self.fail()),
            Failure::RecordVanished => Err(StoreError::UnknownRecord { id: record.id }),
        }
    }

    async fn delete_by_owner(&self, _owner: Uuid) -> Result<Option<FavoritesRecord>, StoreError> {
        Err(self.fail())
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<UserSummary>, StoreError> {
        Ok((id == self.user.id).then(|| self.user.clone()))
    }

    async fn find_campsites(&self, _ids: &[CampsiteId]) -> Result<Vec<Campsite>, StoreError> {
        Err(self.fail())
    }
}
