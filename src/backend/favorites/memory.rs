//! In-memory favorites backend for tests and local development.
use chrono::Utc;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::backend::favorites::store::{FavoritesStorageBackend, StoreError};
use crate::shared::{Campsite, CampsiteId, FavoritesRecord, UserSummary};

/// An in-memory favorites store.
///
/// # Limitations
///
/// Nothing survives a restart and nothing is shared between server instances.
/// Users and campsites used to populate listings must be seeded with
/// [`insert_user`](Self::insert_user) and [`insert_campsite`](Self::insert_campsite).
#[derive(Clone, Default)]
pub struct InMemoryFavoritesStore(Arc<Mutex<Tables>>);

#[derive(Default)]
struct Tables {
    favorites: HashMap<Uuid, FavoritesRecord>,
    users: HashMap<Uuid, UserSummary>,
    campsites: HashMap<CampsiteId, Campsite>,
}

impl std::fmt::Debug for InMemoryFavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryFavoritesStore").finish_non_exhaustive()
    }
}

impl InMemoryFavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_user(&self, user: UserSummary) {
        self.0.lock().await.users.insert(user.id, user);
    }

    pub async fn insert_campsite(&self, campsite: Campsite) {
        self.0.lock().await.campsites.insert(campsite.id.clone(), campsite);
    }

    pub async fn record_count(&self) -> usize {
        self.0.lock().await.favorites.len()
    }
}

#[async_trait::async_trait]
impl FavoritesStorageBackend for InMemoryFavoritesStore {
    async fn find_by_owner(&self, owner: Uuid) -> Result<Option<FavoritesRecord>, StoreError> {
        Ok(self.0.lock().await.favorites.get(&owner).cloned())
    }

    #[tracing::instrument(name = "Create favorites record", level = tracing::Level::TRACE, skip(self))]
    async fn create(&self, owner: Uuid) -> Result<FavoritesRecord, StoreError> {
        let mut guard = self.0.lock().await;
        if guard.favorites.contains_key(&owner) {
            return Err(StoreError::DuplicateOwner { owner });
        }
        let record = FavoritesRecord::new(owner);
        guard.favorites.insert(owner, record.clone());
        Ok(record)
    }

    #[tracing::instrument(name = "Save favorites record", level = tracing::Level::TRACE, skip_all)]
    async fn save(&self, record: &FavoritesRecord) -> Result<FavoritesRecord, StoreError> {
        let mut guard = self.0.lock().await;
        let Some(stored) = guard
            .favorites
            .get_mut(&record.owner)
            .filter(|stored| stored.id == record.id)
        else {
            return Err(StoreError::UnknownRecord { id: record.id });
        };
        stored.campsites = record.campsites.clone();
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }

    async fn delete_by_owner(&self, owner: Uuid) -> Result<Option<FavoritesRecord>, StoreError> {
        Ok(self.0.lock().await.favorites.remove(&owner))
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<UserSummary>, StoreError> {
        Ok(self.0.lock().await.users.get(&id).cloned())
    }

    async fn find_campsites(&self, ids: &[CampsiteId]) -> Result<Vec<Campsite>, StoreError> {
        let guard = self.0.lock().await;
        Ok(ids
            .iter()
            .filter_map(|id| guard.campsites.get(id).cloned())
            .collect())
    }
}
