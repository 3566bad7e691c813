use axum::{
    extract::{Form, Path, State, rejection::PathRejection},
    response::{Html, Redirect, Response},
};
use std::sync::Arc;
use tower_sessions::Session;
use tracing::error;

use super::forms::{FormFields, FormPairs, artist_input, require_name, search_term};
use super::{PageError, delete_outcome, flash, views};
use crate::api::AppState;
use crate::models::artist::ArtistInput;
use crate::services::schedule::now_stamp;

/// `GET /artists`
pub async fn list_artists(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Html<String>, PageError> {
    let artists = state.store().list_artists().await?;
    let flashes = flash::take(&session).await;
    Ok(Html(views::artists::list(&artists, &flashes)))
}

/// `GET|POST /artists/search`
pub async fn search_artists(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(pairs): Form<FormPairs>,
) -> Result<Html<String>, PageError> {
    let term = search_term(&FormFields::from(pairs));
    let results = state.store().search_artists(&term).await?;
    let flashes = flash::take(&session).await;
    Ok(Html(views::search::results("artists", &term, &results, &flashes)))
}

/// `GET /artists/{id}`
pub async fn show_artist(
    State(state): State<Arc<AppState>>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Html<String>, PageError> {
    let Path(id) = id?;
    let artist = state
        .store()
        .artist_detail(id, &now_stamp())
        .await?
        .ok_or(PageError::NotFound)?;

    let flashes = flash::take(&session).await;
    Ok(Html(views::artists::detail(&artist, &flashes)))
}

/// `GET /artists/create`
pub async fn create_artist_form(session: Session) -> Html<String> {
    let flashes = flash::take(&session).await;
    Html(views::forms::artist(
        "List a new artist",
        "/artists/create",
        &ArtistInput::default(),
        &flashes,
    ))
}

/// `POST /artists/create`
pub async fn create_artist_submission(
    State(state): State<Arc<AppState>>,
    session: Session,
    Form(pairs): Form<FormPairs>,
) -> Redirect {
    let input = artist_input(&FormFields::from(pairs));
    let name = input.name.clone();

    let outcome = match require_name(&name) {
        Ok(()) => state
            .store()
            .create_artist(input)
            .await
            .map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };

    match outcome {
        Ok(_) => flash::push(&session, flash::listed("Artist", &name)).await,
        Err(e) => {
            error!("Failed to list artist {}: {}", name, e);
            flash::push(&session, flash::not_listed("Artist", &name)).await;
        }
    }

    Redirect::to("/")
}

/// `GET /artists/{id}/edit`
pub async fn edit_artist_form(
    State(state): State<Arc<AppState>>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Html<String>, PageError> {
    let Path(id) = id?;
    let artist = state.store().get_artist(id).await?.ok_or(PageError::NotFound)?;

    let flashes = flash::take(&session).await;
    Ok(Html(views::forms::artist(
        "Edit artist",
        &format!("/artists/{id}/edit"),
        &ArtistInput::from(artist),
        &flashes,
    )))
}

/// `POST /artists/{id}/edit`
///
/// Every field is replaced by the submitted value.
pub async fn edit_artist_submission(
    State(state): State<Arc<AppState>>,
    session: Session,
    id: Result<Path<i32>, PathRejection>,
    Form(pairs): Form<FormPairs>,
) -> Result<Redirect, PageError> {
    let Path(id) = id?;
    let input = artist_input(&FormFields::from(pairs));
    let name = input.name.clone();

    match state.store().update_artist(id, input).await {
        Ok(Some(_)) => {
            flash::push(
                &session,
                flash::Flash::success(format!("Artist {name} was successfully updated!")),
            )
            .await;
        }
        Ok(None) => return Err(PageError::NotFound),
        Err(e) => {
            error!("Failed to update artist {}: {}", id, e);
            flash::push(
                &session,
                flash::Flash::error(format!(
                    "An error occurred. Artist {name} could not be updated."
                )),
            )
            .await;
        }
    }

    Ok(Redirect::to(&format!("/artists/{id}")))
}

/// `DELETE /artists/{id}`
pub async fn delete_artist(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Response {
    let Ok(Path(id)) = id else {
        return delete_outcome("artist", 0, Ok(false));
    };
    delete_outcome("artist", id, state.store().delete_artist(id).await)
}
