//! Types related to [`PostgresFavoritesStore`].
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::favorites::store::{FavoritesStorageBackend, StoreError};
use crate::shared::{Campsite, CampsiteId, FavoritesRecord, UserSummary};

/// Unique-constraint name guarding one record per owner
const OWNER_UNIQUE_CONSTRAINT: &str = "favorites_owner_key";

/// A favorites store using Postgres as its backend.
///
/// # Implementation details
///
/// Each record is one row of the `favorites` table. The campsite list is a
/// `TEXT[]` column, so a save rewrites the whole list in a single statement.
/// Listings read the `users` and `campsites` tables to resolve references.
/// The schema is created by the migrations in `migrations/`.
#[derive(Debug, Clone)]
pub struct PostgresFavoritesStore(PgPool);

impl PostgresFavoritesStore {
    pub fn new(pool: PgPool) -> Self {
        Self(pool)
    }

    /// Run the embedded migrations against the pool
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.0).await
    }
}

#[derive(sqlx::FromRow)]
struct FavoritesRow {
    id: Uuid,
    owner: Uuid,
    campsites: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<FavoritesRow> for FavoritesRecord {
    fn from(row: FavoritesRow) -> Self {
        Self {
            id: row.id,
            owner: row.owner,
            // Rows are only written through `FavoritesRecord`, whose ids are never blank
            campsites: row
                .campsites
                .into_iter()
                .filter_map(|raw| CampsiteId::parse(raw).ok())
                .collect(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CampsiteRow {
    id: String,
    name: String,
    description: String,
    image: String,
    elevation: i32,
    cost: f64,
    featured: bool,
}

fn campsite_ids_as_text(ids: &[CampsiteId]) -> Vec<String> {
    ids.iter().map(|id| id.as_str().to_string()).collect()
}

fn is_owner_conflict(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db) => db.constraint() == Some(OWNER_UNIQUE_CONSTRAINT),
        _ => false,
    }
}

#[async_trait::async_trait]
impl FavoritesStorageBackend for PostgresFavoritesStore {
    #[tracing::instrument(name = "Load favorites record", level = tracing::Level::DEBUG, skip(self))]
    async fn find_by_owner(&self, owner: Uuid) -> Result<Option<FavoritesRecord>, StoreError> {
        let row = sqlx::query_as::<_, FavoritesRow>(
            r#"
            SELECT id, owner, campsites, created_at, updated_at
            FROM favorites
            WHERE owner = $1
            "#,
        )
        .bind(owner)
        .fetch_optional(&self.0)
        .await?;

        Ok(row.map(FavoritesRecord::from))
    }

    #[tracing::instrument(name = "Create favorites record", level = tracing::Level::INFO, skip(self))]
    async fn create(&self, owner: Uuid) -> Result<FavoritesRecord, StoreError> {
        let record = FavoritesRecord::new(owner);

        let query = sqlx::query(
            r#"
            INSERT INTO favorites (id, owner, campsites, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(record.id)
        .bind(record.owner)
        .bind(campsite_ids_as_text(&record.campsites))
        .bind(record.created_at)
        .bind(record.updated_at);

        match query.execute(&self.0).await {
            Ok(_) => Ok(record),
            Err(e) if is_owner_conflict(&e) => Err(StoreError::DuplicateOwner { owner }),
            Err(e) => Err(e.into()),
        }
    }

    #[tracing::instrument(name = "Save favorites record", level = tracing::Level::INFO, skip_all, fields(record_id = %record.id))]
    async fn save(&self, record: &FavoritesRecord) -> Result<FavoritesRecord, StoreError> {
        let row = sqlx::query_as::<_, FavoritesRow>(
            r#"
            UPDATE favorites
            SET campsites = $1, updated_at = $2
            WHERE id = $3 AND owner = $4
            RETURNING id, owner, campsites, created_at, updated_at
            "#,
        )
        .bind(campsite_ids_as_text(&record.campsites))
        .bind(Utc::now())
        .bind(record.id)
        .bind(record.owner)
        .fetch_optional(&self.0)
        .await?;

        row.map(FavoritesRecord::from)
            .ok_or(StoreError::UnknownRecord { id: record.id })
    }

    #[tracing::instrument(name = "Delete favorites record", level = tracing::Level::INFO, skip(self))]
    async fn delete_by_owner(&self, owner: Uuid) -> Result<Option<FavoritesRecord>, StoreError> {
        let row = sqlx::query_as::<_, FavoritesRow>(
            r#"
            DELETE FROM favorites
            WHERE owner = $1
            RETURNING id, owner, campsites, created_at, updated_at
            "#,
        )
        .bind(owner)
        .fetch_optional(&self.0)
        .await?;

        Ok(row.map(FavoritesRecord::from))
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<UserSummary>, StoreError> {
        let row = sqlx::query_as::<_, (Uuid, String, String)>(
            "SELECT id, username, email FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.0)
        .await?;

        Ok(row.map(|(id, username, email)| UserSummary { id, username, email }))
    }

    async fn find_campsites(&self, ids: &[CampsiteId]) -> Result<Vec<Campsite>, StoreError> {
        let rows = sqlx::query_as::<_, CampsiteRow>(
            r#"
            SELECT id, name, description, image, elevation, cost, featured
            FROM campsites
            WHERE id = ANY($1)
            "#,
        )
        .bind(campsite_ids_as_text(ids))
        .fetch_all(&self.0)
        .await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                Some(Campsite {
                    id: CampsiteId::parse(row.id).ok()?,
                    name: row.name,
                    description: row.description,
                    image: row.image,
                    elevation: row.elevation,
                    cost: row.cost,
                    featured: row.featured,
                })
            })
            .collect())
    }
}
