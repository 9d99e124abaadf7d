//! Response shapes shared by the favorites handlers.
//!
//! Successful operations answer with JSON. No-op outcomes (already
//! favorited, nothing to delete) are soft successes: 200 with a plain-text
//! notice instead of an error status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

/// Plain-text notices for operations that change nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Bulk add refused because a campsite is already favorited
    AlreadyFavorited,
    /// Single add of a campsite that is already favorited
    AlreadyInList,
    /// Collection delete without a record
    NoFavoritesToDelete,
    /// Item delete without a record
    NothingToDelete,
    /// Item delete of a campsite that is not favorited
    NotInList,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Self::AlreadyFavorited => "This campsite has already been favorited",
            Self::AlreadyInList => "That campsite is already in the list of favorites",
            Self::NoFavoritesToDelete => "You do not have any favorites to delete.",
            Self::NothingToDelete => "There are no favorites to delete.",
            Self::NotInList => "That campsite is not in the list of favorites.",
        }
    }
}

impl IntoResponse for Notice {
    fn into_response(self) -> Response {
        (StatusCode::OK, self.message()).into_response()
    }
}

/// Either the JSON document an operation produced or a soft notice
#[derive(Debug)]
pub enum FavoritesReply<T> {
    Json(T),
    Notice(Notice),
}

impl<T: Serialize> IntoResponse for FavoritesReply<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Json(body) => (StatusCode::OK, Json(body)).into_response(),
            Self::Notice(notice) => notice.into_response(),
        }
    }
}

pub const UNSUPPORTED_MESSAGE: &str = "This operation is not supported";

/// Handler for methods the favorites resources do not implement
pub async fn unsupported() -> (StatusCode, &'static str) {
    (StatusCode::FORBIDDEN, UNSUPPORTED_MESSAGE)
}

/// Handler for OPTIONS requests that are not CORS preflights
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}
