/**
 * Server Initialization
 *
 * Builds the application state and router from a resolved configuration.
 *
 * # Initialization Process
 *
 * 1. Open the favorites store (Postgres when configured, memory otherwise)
 * 2. Create the application state
 * 3. Create the router with all routes and middleware
 */

use axum::Router;

use crate::backend::favorites::FavoritesStore;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_store, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app(config: ServerConfig) -> Router<()> {
    tracing::info!("Initializing campsite favorites server");

    if config.uses_dev_secret() {
        tracing::warn!("JWT_SECRET not set. Using the development secret.");
    }

    let store = load_store(&config).await;
    let app = create_app_with_store(store, config);

    tracing::info!("Router configured");
    app
}

/// Create the application around an already-opened store
///
/// Used by tests to inject a seeded in-memory store.
pub fn create_app_with_store(store: FavoritesStore, config: ServerConfig) -> Router<()> {
    tracing::info!(
        bulk_add_policy = ?config.bulk_add_policy,
        cors_origins = config.cors_allowed_origins.len(),
        "Favorites store ready"
    );
    let app_state = AppState::new(store, config);
    create_router(app_state)
}
