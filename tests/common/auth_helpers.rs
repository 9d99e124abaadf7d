//! Authentication test helpers
//!
//! Creates users in the in-memory store and signs tokens for them with the
//! test secret.

use campsite_favorites::backend::auth::create_token;
use campsite_favorites::backend::InMemoryFavoritesStore;
use campsite_favorites::shared::UserSummary;
use uuid::Uuid;

/// Secret shared by the test server config and the helpers below
pub const TEST_JWT_SECRET: &str = "favorites-test-secret";

/// Test user credentials
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub token: String,
}

/// Create a user in the store and a valid token for it
pub async fn create_test_user(store: &InMemoryFavoritesStore, username: &str) -> TestUser {
    let id = Uuid::new_v4();
    let email = format!("{}@example.com", username);
    store
        .insert_user(UserSummary {
            id,
            username: username.to_string(),
            email: email.clone(),
        })
        .await;

    TestUser {
        id,
        username: username.to_string(),
        token: generate_test_token(id, &email),
        email,
    }
}

/// Generate a test JWT token
pub fn generate_test_token(user_id: Uuid, email: &str) -> String {
    create_token(user_id, email, TEST_JWT_SECRET).expect("Failed to generate test token")
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
