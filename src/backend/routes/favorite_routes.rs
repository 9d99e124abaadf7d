/**
 * Favorites Routes
 *
 * Route table for the favorites resources, mounted under `/favorites`.
 *
 * | Method | Path | Auth | CORS |
 * |---|---|---|---|
 * | OPTIONS | `/` | no | allowlist |
 * | GET | `/` | yes | open |
 * | POST, PUT, DELETE | `/` | yes | allowlist |
 * | GET | `/{campsite_id}` | no | open |
 * | OPTIONS, POST, PUT, DELETE | `/{campsite_id}` | yes | allowlist |
 *
 * Each path is registered twice, once per CORS policy; Axum merges the two
 * method routers. Browser preflights are answered by the CORS layer before
 * authentication runs.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, options, post},
    Router,
};

use crate::backend::favorites::handlers::{
    add_favorite, add_favorites, delete_favorites, list_favorites, preflight, remove_favorite,
    unsupported,
};
use crate::backend::middleware::{auth_middleware, cors};
use crate::backend::server::state::AppState;

/// Build the favorites router
///
/// # Arguments
///
/// * `app_state` - Application state, needed by the auth middleware and the CORS allowlist
pub fn favorites_router(app_state: &AppState) -> Router<AppState> {
    let auth = || from_fn_with_state(app_state.clone(), auth_middleware);
    let allowlist = cors::with_options(&app_state.config);

    Router::new()
        .route(
            "/",
            get(list_favorites).route_layer(auth()).layer(cors::open()),
        )
        .route(
            "/",
            post(add_favorites)
                .put(unsupported)
                .delete(delete_favorites)
                .route_layer(auth())
                .options(preflight)
                .layer(allowlist.clone()),
        )
        .route(
            "/{campsite_id}",
            get(unsupported).layer(cors::open()),
        )
        .route(
            "/{campsite_id}",
            options(preflight)
                .post(add_favorite)
                .put(unsupported)
                .delete(remove_favorite)
                .route_layer(auth())
                .layer(allowlist),
        )
}
