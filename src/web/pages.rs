use axum::{
    http::header,
    response::{Html, IntoResponse},
};
use tower_sessions::Session;

use super::{PageError, flash, views};

/// `GET /`
pub async fn home(session: Session) -> Html<String> {
    let flashes = flash::take(&session).await;
    Html(views::home::page(&flashes))
}

pub async fn not_found() -> PageError {
    PageError::NotFound
}

/// `GET /static/delete.js`
pub async fn delete_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        views::DELETE_SCRIPT,
    )
}
