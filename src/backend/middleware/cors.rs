//! CORS policies for browser clients.
//!
//! Two policies are applied per route:
//! - [`open`] for read-only GET routes: any origin.
//! - [`with_options`] for everything else: only the configured origins.
//!
//! Neither policy allows credentials; the API authenticates with bearer
//! tokens, not cookies.

use axum::http::{header, HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::backend::server::config::ServerConfig;

const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(60 * 10);

const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

/// Policy accepting requests from any origin
pub fn open() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(PREFLIGHT_MAX_AGE)
}

/// Policy accepting only `config.cors_allowed_origins`
///
/// Origins that do not parse as header values are skipped with a warning.
/// An empty allowlist yields no CORS headers at all.
pub fn with_options(config: &ServerConfig) -> CorsLayer {
    let allowed: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(PREFLIGHT_MAX_AGE)
}
