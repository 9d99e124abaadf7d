/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Health check
 * 2. Favorites routes (nested under `/favorites`)
 * 3. Fallback handler (404)
 *
 * A `TraceLayer` wraps everything so every request is logged.
 */

use axum::{http::StatusCode, response::Json, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::backend::routes::favorite_routes::favorites_router;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// The router is built once at startup; the returned value owns the state.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new()
        .route("/health", get(health))
        .nest("/favorites", favorites_router(&app_state));

    // Fallback handler for 404
    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    router
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
