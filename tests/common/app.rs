//! Test application fixture
//!
//! Builds the real router around a seeded in-memory store.

use axum::Router;
use axum_test::TestServer;
use campsite_favorites::backend::{create_app_with_store, FavoritesStore, InMemoryFavoritesStore, ServerConfig};
use campsite_favorites::shared::{BulkAddPolicy, Campsite, CampsiteId};

use super::auth_helpers::{create_test_user, TestUser, TEST_JWT_SECRET};

pub const ALLOWED_ORIGIN: &str = "https://localhost:3443";

/// A running test server and the store behind it
pub struct TestApp {
    pub server: TestServer,
    pub store: InMemoryFavoritesStore,
    pub user: TestUser,
}

pub fn test_config(policy: BulkAddPolicy) -> ServerConfig {
    ServerConfig::builder()
        .jwt_secret(TEST_JWT_SECRET)
        .cors_allowed_origins(vec![ALLOWED_ORIGIN.to_string()])
        .bulk_add_policy(policy)
        .build()
        .expect("valid test config")
}

/// Build the router over `store` without starting a test server
pub fn build_router(store: &InMemoryFavoritesStore, policy: BulkAddPolicy) -> Router {
    create_app_with_store(FavoritesStore::new(store.clone()), test_config(policy))
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_policy(BulkAddPolicy::Reject).await
}

pub async fn spawn_app_with_policy(policy: BulkAddPolicy) -> TestApp {
    let store = InMemoryFavoritesStore::new();
    seed_campsites(&store).await;
    let user = create_test_user(&store, "camper").await;

    let server = TestServer::new(build_router(&store, policy)).expect("Failed to start test server");

    TestApp { server, store, user }
}

async fn seed_campsites(store: &InMemoryFavoritesStore) {
    let catalog = [
        ("c1", "React Lake Campground", 1233, 65.0, true),
        ("c2", "Chrome River Campground", 877, 55.0, false),
        ("c3", "Breadcrumb Trail Campground", 2901, 75.0, false),
    ];
    for (id, name, elevation, cost, featured) in catalog {
        store
            .insert_campsite(Campsite {
                id: CampsiteId::parse(id).unwrap(),
                name: name.to_string(),
                description: format!("{} description", name),
                image: format!("images/{}.jpg", id),
                elevation,
                cost,
                featured,
            })
            .await;
    }
}
