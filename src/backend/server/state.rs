/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits used for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is built once at startup and cloned into every handler:
 * - `store` - handle to the favorites storage backend
 * - `config` - resolved server configuration
 *
 * Both fields are cheap to clone (`Arc` inside). No per-request mutable
 * state is kept here; all favorites data lives in the store.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::favorites::FavoritesStore;
use crate::backend::server::config::ServerConfig;

/// Shared state handed to every handler and middleware
#[derive(Clone)]
pub struct AppState {
    /// Favorites persistence (Postgres or in-memory)
    pub store: FavoritesStore,

    /// Server configuration, including the JWT secret and bulk-add policy
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: FavoritesStore, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

/// Allows handlers to extract the store with `State(FavoritesStore)`
impl FromRef<AppState> for FavoritesStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

/// Allows handlers to extract the configuration with `State(Arc<ServerConfig>)`
impl FromRef<AppState> for Arc<ServerConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
