//! Assertion helpers for favorites responses

use axum_test::TestResponse;
use campsite_favorites::shared::FavoritesRecord;

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}

/// Assert a 200 JSON response and decode the favorites record it carries
pub fn expect_record(response: &TestResponse) -> FavoritesRecord {
    assert_eq!(response.status_code(), 200, "body: {}", response.text());
    assert_eq!(response.header("content-type"), "application/json");
    response.json::<FavoritesRecord>()
}

/// Assert a 200 plain-text notice and return its text
pub fn expect_notice(response: &TestResponse) -> String {
    assert_eq!(response.status_code(), 200);
    let content_type = response.header("content-type");
    assert!(
        content_type.to_str().unwrap().starts_with("text/plain"),
        "unexpected content type {:?}",
        content_type
    );
    response.text()
}

/// Campsite ids of a record as plain strings
pub fn campsite_ids(record: &FavoritesRecord) -> Vec<&str> {
    record.campsites.iter().map(|c| c.as_str()).collect()
}
