use axum::{
    extract::{Form, State},
    response::{Html, Redirect},
};
use std::sync::Arc;
use tower_sessions::Session;
use tracing::{error, warn};

use super::forms::{FormFields, FormPairs, show_input};
use super::{PageError, flash, views};
use crate::api::AppState;
use crate::services::schedule::now_stamp;

/// `GET /shows`
pub async fn list_shows(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Html<String>, PageError> {
    let shows = state.store().list_shows().await?;
    let flashes = flash::take(&session).await;
    Ok(Html(views::shows::list(&shows, &flashes)))
}

/// `GET /shows/create`
pub async fn create_show_form(session: Session) -> Html<String> {
    let flashes = flash::take(&session).await;
    Html(views::forms::show(&now_stamp(), &flashes))
}

/// `POST /shows/create`
pub async fn create_show_submission(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(pairs): Form<FormPairs>,
) -> Redirect {
    let message = match show_input(&FormFields::from(pairs)) {
        Ok(input) => match state.store().create_show(input).await {
            Ok(_) => flash::Flash::success("Show was successfully listed!"),
            Err(e) => {
                error!("Failed to list show: {}", e);
                flash::Flash::error("An error occurred. Show could not be listed.")
            }
        },
        Err(e) => {
            warn!("Rejected show submission: {}", e);
            flash::Flash::error("An error occurred. Show could not be listed.")
        }
    };

    flash::push(&session, message).await;
    Redirect::to("/")
}
