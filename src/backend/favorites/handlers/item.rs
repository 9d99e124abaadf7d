//! Handlers for the `/favorites/{campsite_id}` item resource.

use axum::extract::{Path, State};

use crate::backend::error::BackendError;
use crate::backend::favorites::handlers::reply::{FavoritesReply, Notice};
use crate::backend::favorites::store::FavoritesStore;
use crate::backend::middleware::AuthUser;
use crate::shared::{AddOutcome, CampsiteId, FavoritesRecord, RemoveOutcome};

/// POST /favorites/{campsite_id} - Favorite a single campsite
pub async fn add_favorite(
    State(store): State<FavoritesStore>,
    AuthUser(user): AuthUser,
    Path(campsite_id): Path<String>,
) -> Result<FavoritesReply<FavoritesRecord>, BackendError> {
    let campsite = CampsiteId::parse(&campsite_id)?;
    let (mut record, created) = store.find_or_create(user.user_id).await?;

    match record.add_campsite(campsite) {
        AddOutcome::AlreadyPresent => Ok(FavoritesReply::Notice(Notice::AlreadyInList)),
        AddOutcome::Added => {
            let saved = store.save(&record).await?;
            tracing::info!(
                user_id = %user.user_id,
                %campsite_id,
                created,
                total = saved.campsites.len(),
                "Favorite added"
            );
            Ok(FavoritesReply::Json(saved))
        }
    }
}

/// DELETE /favorites/{campsite_id} - Unfavorite a single campsite
///
/// A missing record and a campsite that is not favorited are both soft
/// successes, with different notices.
pub async fn remove_favorite(
    State(store): State<FavoritesStore>,
    AuthUser(user): AuthUser,
    Path(campsite_id): Path<String>,
) -> Result<FavoritesReply<FavoritesRecord>, BackendError> {
    let campsite = CampsiteId::parse(&campsite_id)?;

    let Some(mut record) = store.find_by_owner(user.user_id).await? else {
        return Ok(FavoritesReply::Notice(Notice::NothingToDelete));
    };

    match record.remove_campsite(&campsite) {
        RemoveOutcome::NotPresent => Ok(FavoritesReply::Notice(Notice::NotInList)),
        RemoveOutcome::Removed(index) => {
            let saved = store.save(&record).await?;
            tracing::info!(
                user_id = %user.user_id,
                %campsite_id,
                index,
                total = saved.campsites.len(),
                "Favorite removed"
            );
            Ok(FavoritesReply::Json(saved))
        }
    }
}
