use axum::{
    extract::{Form, Path, State, rejection::PathRejection},
    response::{Html, Redirect, Response},
};
use std::sync::Arc;
use tower_sessions::Session;
use tracing::error;

use super::forms::{FormFields, FormPairs, require_name, search_term, venue_input};
use super::{PageError, delete_outcome, flash, views};
use crate::api::AppState;
use crate::models::venue::VenueInput;
use crate::services::schedule::now_stamp;

/// `GET /venues`
pub async fn list_venues(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Html<String>, PageError> {
    let areas = state.store().list_venue_areas(&now_stamp()).await?;
    let flashes = flash::take(&session).await;
    Ok(Html(views::venues::list(&areas, &flashes)))
}

/// `GET|POST /venues/search`
pub async fn search_venues(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(pairs): Form<FormPairs>,
) -> Result<Html<String>, PageError> {
    let term = search_term(&FormFields::from(pairs));
    let results = state.store().search_venues(&term).await?;
    let flashes = flash::take(&session).await;
    Ok(Html(views::search::results("venues", &term, &results, &flashes)))
}

/// `GET /venues/{id}`
pub async fn show_venue(
    State(state): State<Arc<AppState>>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Html<String>, PageError> {
    let Path(id) = id?;
    let venue = state
        .store()
        .venue_detail(id, &now_stamp())
        .await?
        .ok_or(PageError::NotFound)?;

    let flashes = flash::take(&session).await;
    Ok(Html(views::venues::detail(&venue, &flashes)))
}

/// `GET /venues/create`
pub async fn create_venue_form(session: Session) -> Html<String> {
    let flashes = flash::take(&session).await;
    Html(views::forms::venue(
        "List a new venue",
        "/venues/create",
        &VenueInput::default(),
        &flashes,
    ))
}

/// `POST /venues/create`
pub async fn create_venue_submission(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(pairs): Form<FormPairs>,
) -> Redirect {
    let input = venue_input(&FormFields::from(pairs));
    let name = input.name.clone();

    let outcome = match require_name(&name) {
        Ok(()) => state
            .store()
            .create_venue(input)
            .await
            .map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };

    match outcome {
        Ok(_) => flash::push(&session, flash::listed("Venue", &name)).await,
        Err(e) => {
            error!("Failed to list venue {}: {}", name, e);
            flash::push(&session, flash::not_listed("Venue", &name)).await;
        }
    }

    Redirect::to("/")
}

/// `GET /venues/{id}/edit`
pub async fn edit_venue_form(
    State(state): State<Arc<AppState>>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Html<String>, PageError> {
    let Path(id) = id?;
    let venue = state.store().get_venue(id).await?.ok_or(PageError::NotFound)?;

    let flashes = flash::take(&session).await;
    Ok(Html(views::forms::venue(
        "Edit venue",
        &format!("/venues/{id}/edit"),
        &VenueInput::from(venue),
        &flashes,
    )))
}

/// `POST /venues/{id}/edit`
///
/// Every field is replaced by the submitted value.
pub async fn edit_venue_submission(
    State(state): State<Arc<AppState>>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
    Form(pairs): Form<FormPairs>,
) -> Result<Redirect, PageError> {
    let Path(id) = id?;
    let input = venue_input(&FormFields::from(pairs));
    let name = input.name.clone();

    match state.store().update_venue(id, input).await {
        Ok(Some(_)) => {
            flash::push(
                &session,
                flash::Flash::success(format!("Venue {name} was successfully updated!")),
            )
            .await;
        }
        Ok(None) => return Err(PageError::NotFound),
        Err(e) => {
            error!("Failed to update venue {}: {}", id, e);
            flash::push(
                &session,
                flash::Flash::error(format!(
                    "An error occurred. Venue {name} could not be updated."
                )),
            )
            .await;
        }
    }

    Ok(Redirect::to(&format!("/venues/{id}")))
}

/// `DELETE /venues/{id}`
pub async fn delete_venue(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Response {
    let Ok(Path(id)) = id else {
        return delete_outcome("venue", 0, Ok(false));
    };
    delete_outcome("venue", id, state.store().delete_venue(id).await)
}
