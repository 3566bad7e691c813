//! The Fyyur listing site: server-rendered pages and form handlers.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::error;

use crate::api::AppState;

mod artists;
mod error;
pub mod flash;
pub mod forms;
mod pages;
mod shows;
mod venues;
pub mod views;

pub use error::PageError;
pub use pages::not_found;

#[derive(Debug, Serialize)]
struct DeleteResponse {
    success: bool,
}

/// JSON answer to a record delete: 404 when nothing matched, 500 when the database refused.
fn delete_outcome(kind: &str, id: i32, result: anyhow::Result<bool>) -> Response {
    let status = match result {
        Ok(true) => StatusCode::OK,
        Ok(false) => StatusCode::NOT_FOUND,
        Err(e) => {
            error!("Failed to delete {} {}: {}", kind, id, e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(DeleteResponse {
            success: status == StatusCode::OK,
        }),
    )
        .into_response()
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(pages::home))
        .route("/static/delete.js", get(pages::delete_script))
        .route("/venues", get(venues::list_venues))
        .route(
            "/venues/search",
            get(venues::search_venues).post(venues::search_venues),
        )
        .route(
            "/venues/create",
            get(venues::create_venue_form).post(venues::create_venue_submission),
        )
        .route(
            "/venues/{id}",
            get(venues::show_venue).delete(venues::delete_venue),
        )
        .route(
            "/venues/{id}/edit",
            get(venues::edit_venue_form).post(venues::edit_venue_submission),
        )
        .route("/artists", get(artists::list_artists))
        .route(
            "/artists/search",
            get(artists::search_artists).post(artists::search_artists),
        )
        .route(
            "/artists/create",
            get(artists::create_artist_form).post(artists::create_artist_submission),
        )
        .route(
            "/artists/{id}",
            get(artists::show_artist).delete(artists::delete_artist),
        )
        .route(
            "/artists/{id}/edit",
            get(artists::edit_artist_form).post(artists::edit_artist_submission),
        )
        .route("/shows", get(shows::list_shows))
        .route(
            "/shows/create",
            get(shows::create_show_form).post(shows::create_show_submission),
        )
}
