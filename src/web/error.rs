use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::fmt;

use super::views;

/// Failure of an HTML page handler, rendered as the 404 or 500 page.
#[derive(Debug)]
pub enum PageError {
    NotFound,

    Internal(String),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageError::NotFound => write!(f, "Page not found"),
            PageError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for PageError {}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound => {
                (StatusCode::NOT_FOUND, Html(views::errors::not_found())).into_response()
            }
            PageError::Internal(msg) => {
                tracing::error!("Page handler failed: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(views::errors::server_error()),
                )
                    .into_response()
            }
        }
    }
}

impl From<anyhow::Error> for PageError {
    fn from(err: anyhow::Error) -> Self {
        PageError::Internal(err.to_string())
    }
}

/// A non-numeric id in the path names no record.
impl From<PathRejection> for PageError {
    fn from(_: PathRejection) -> Self {
        PageError::NotFound
    }
}
