//! Handlers for the `/favorites` collection resource.

use axum::{
    extract::State,
    response::Json,
};
use std::sync::Arc;

use crate::backend::error::BackendError;
use crate::backend::favorites::handlers::reply::{FavoritesReply, Notice};
use crate::backend::favorites::store::FavoritesStore;
use crate::backend::middleware::AuthUser;
use crate::backend::server::config::ServerConfig;
use crate::shared::{parse_campsite_refs, BulkAddOutcome, CampsiteRef, FavoritesRecord, PopulatedFavorites};

/// GET /favorites - List the caller's favorites with references resolved
///
/// Returns `[]` when the caller has no record, `[record]` otherwise.
pub async fn list_favorites(
    State(store): State<FavoritesStore>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<PopulatedFavorites>>, BackendError> {
    let favorites = match store.find_by_owner(user.user_id).await? {
        Some(record) => vec![store.populate(&record).await?],
        None => Vec::new(),
    };

    tracing::debug!(user_id = %user.user_id, records = favorites.len(), "Listed favorites");
    Ok(Json(favorites))
}

/// POST /favorites - Add a batch of campsites
///
/// The body is a JSON array of campsite ids or `{"_id": ...}` documents.
/// How already-favorited ids are treated depends on the configured
/// bulk-add policy.
pub async fn add_favorites(
    State(store): State<FavoritesStore>,
    State(config): State<Arc<ServerConfig>>,
    AuthUser(user): AuthUser,
    Json(refs): Json<Vec<CampsiteRef>>,
) -> Result<FavoritesReply<FavoritesRecord>, BackendError> {
    let batch = parse_campsite_refs(&refs)?;

    let (mut record, created) = store.find_or_create(user.user_id).await?;

    match record.add_campsites(batch, config.bulk_add_policy) {
        BulkAddOutcome::Rejected(existing) => {
            tracing::info!(
                user_id = %user.user_id,
                campsite = %existing,
                "Bulk add refused, campsite already favorited"
            );
            Ok(FavoritesReply::Notice(Notice::AlreadyFavorited))
        }
        BulkAddOutcome::Added(added) if added.is_empty() => {
            tracing::debug!(user_id = %user.user_id, created, "Bulk add changed nothing");
            Ok(FavoritesReply::Json(record))
        }
        BulkAddOutcome::Added(added) => {
            let saved = store.save(&record).await?;
            tracing::info!(
                user_id = %user.user_id,
                created,
                added = added.len(),
                total = saved.campsites.len(),
                "Favorites added"
            );
            Ok(FavoritesReply::Json(saved))
        }
    }
}

/// DELETE /favorites - Remove the caller's whole record
pub async fn delete_favorites(
    State(store): State<FavoritesStore>,
    AuthUser(user): AuthUser,
) -> Result<FavoritesReply<FavoritesRecord>, BackendError> {
    match store.delete_by_owner(user.user_id).await? {
        Some(record) => {
            tracing::info!(user_id = %user.user_id, record_id = %record.id, "Favorites record deleted");
            Ok(FavoritesReply::Json(record))
        }
        None => Ok(FavoritesReply::Notice(Notice::NoFavoritesToDelete)),
    }
}
