//! Integration tests for the /favorites/{campsite_id} item resource

mod common;

use common::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn test_add_single_creates_record() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/favorites/c2")
        .authorization_bearer(&app.user.token)
        .await;

    let record = expect_record(&response);
    assert_eq!(record.owner, app.user.id);
    assert_eq!(campsite_ids(&record), vec!["c2"]);
    assert_eq!(app.store.record_count().await, 1);
}

#[tokio::test]
async fn test_add_single_appends_to_existing_record() {
    let app = spawn_app().await;
    let created = expect_record(
        &app.server
            .post("/favorites")
            .authorization_bearer(&app.user.token)
            .json(&json!(["c1"]))
            .await,
    );

    let response = app
        .server
        .post("/favorites/c3")
        .authorization_bearer(&app.user.token)
        .await;

    let record = expect_record(&response);
    assert_eq!(record.id, created.id);
    assert_eq!(campsite_ids(&record), vec!["c1", "c3"]);
    assert!(record.updated_at >= created.updated_at);
}

#[tokio::test]
async fn test_add_single_already_present_returns_notice() {
    let app = spawn_app().await;
    app.server
        .post("/favorites/c1")
        .authorization_bearer(&app.user.token)
        .await;

    let response = app
        .server
        .post("/favorites/c1")
        .authorization_bearer(&app.user.token)
        .await;

    assert_eq!(
        expect_notice(&response),
        "That campsite is already in the list of favorites"
    );
}

#[tokio::test]
async fn test_remove_single_returns_updated_record() {
    let app = spawn_app().await;
    app.server
        .post("/favorites")
        .authorization_bearer(&app.user.token)
        .json(&json!(["c1", "c2", "c3"]))
        .await;

    let response = app
        .server
        .delete("/favorites/c2")
        .authorization_bearer(&app.user.token)
        .await;

    let record = expect_record(&response);
    assert_eq!(campsite_ids(&record), vec!["c1", "c3"]);
}

#[tokio::test]
async fn test_remove_last_campsite_keeps_empty_record() {
    let app = spawn_app().await;
    app.server
        .post("/favorites/c1")
        .authorization_bearer(&app.user.token)
        .await;

    let response = app
        .server
        .delete("/favorites/c1")
        .authorization_bearer(&app.user.token)
        .await;

    let record = expect_record(&response);
    assert!(record.campsites.is_empty());
    assert_eq!(app.store.record_count().await, 1);
}

#[tokio::test]
async fn test_remove_without_record_returns_notice() {
    let app = spawn_app().await;

    let response = app
        .server
        .delete("/favorites/c1")
        .authorization_bearer(&app.user.token)
        .await;

    assert_eq!(expect_notice(&response), "There are no favorites to delete.");
    assert_eq!(app.store.record_count().await, 0);
}

#[tokio::test]
async fn test_remove_absent_campsite_leaves_record_untouched() {
    let app = spawn_app().await;
    app.server
        .post("/favorites")
        .authorization_bearer(&app.user.token)
        .json(&json!(["c1", "c2"]))
        .await;

    let response = app
        .server
        .delete("/favorites/c9")
        .authorization_bearer(&app.user.token)
        .await;
    assert_eq!(
        expect_notice(&response),
        "That campsite is not in the list of favorites."
    );

    let body = app
        .server
        .get("/favorites")
        .authorization_bearer(&app.user.token)
        .await
        .json::<serde_json::Value>();
    assert_eq!(body[0]["campsites"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_get_item_is_forbidden_without_auth() {
    let app = spawn_app().await;

    let response = app.server.get("/favorites/c1").await;

    assert_eq!(response.status_code(), 403);
    assert_eq!(response.text(), "This operation is not supported");
}

#[tokio::test]
async fn test_put_item_is_forbidden() {
    let app = spawn_app().await;

    let response = app
        .server
        .put("/favorites/c1")
        .authorization_bearer(&app.user.token)
        .await;

    assert_eq!(response.status_code(), 403);
    assert_eq!(response.text(), "This operation is not supported");
}

#[tokio::test]
async fn test_item_mutations_require_auth() {
    let app = spawn_app().await;

    assert_eq!(app.server.post("/favorites/c1").await.status_code(), 401);
    assert_eq!(app.server.put("/favorites/c1").await.status_code(), 401);
    assert_eq!(app.server.delete("/favorites/c1").await.status_code(), 401);
    assert_eq!(app.store.record_count().await, 0);
}

/// The scenario from the product walkthrough: add, remove, clear, clear again
#[tokio::test]
async fn test_favorites_lifecycle() {
    let app = spawn_app().await;
    let token = app.user.token.clone();

    let record = expect_record(
        &app.server
            .post("/favorites")
            .authorization_bearer(&token)
            .json(&json!(["c1", "c2"]))
            .await,
    );
    assert_eq!(campsite_ids(&record), vec!["c1", "c2"]);

    let record = expect_record(&app.server.post("/favorites/c3").authorization_bearer(&token).await);
    assert_eq!(campsite_ids(&record), vec!["c1", "c2", "c3"]);

    let record = expect_record(&app.server.delete("/favorites/c1").authorization_bearer(&token).await);
    assert_eq!(campsite_ids(&record), vec!["c2", "c3"]);

    let deleted = expect_record(&app.server.delete("/favorites").authorization_bearer(&token).await);
    assert_eq!(campsite_ids(&deleted), vec!["c2", "c3"]);

    let response = app.server.delete("/favorites").authorization_bearer(&token).await;
    assert_eq!(expect_notice(&response), "You do not have any favorites to delete.");
}
