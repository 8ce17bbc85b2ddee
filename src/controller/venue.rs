use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    data::venue::VenueRepository,
    error::AppError,
    middleware::flash::FlashSession,
    model::venue::{CreateVenueParams, UpdateVenueParams},
    service::venue::VenueService,
    state::AppState,
    util::parse::{non_empty, split_genres},
    view,
};

/// Venue form fields as submitted by the create and edit pages.
///
/// Optional inputs arrive as empty strings and the seeking checkbox is
/// absent when unchecked, so every field defaults.
#[derive(Deserialize)]
pub struct VenueForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub genres: String,
    #[serde(default)]
    pub seeking_talent: bool,
    #[serde(default)]
    pub seeking_description: String,
}

impl VenueForm {
    fn into_create_params(self) -> CreateVenueParams {
        CreateVenueParams {
            name: self.name,
            city: self.city,
            state: self.state,
            address: self.address,
            phone: non_empty(self.phone),
            image_link: non_empty(self.image_link),
            facebook_link: non_empty(self.facebook_link),
            website: non_empty(self.website),
            genres: split_genres(&self.genres),
            seeking_talent: self.seeking_talent,
            seeking_description: non_empty(self.seeking_description),
        }
    }

    fn into_update_params(self, id: i32) -> UpdateVenueParams {
        UpdateVenueParams {
            id,
            name: self.name,
            city: self.city,
            state: self.state,
            address: self.address,
            phone: non_empty(self.phone),
            image_link: non_empty(self.image_link),
            facebook_link: non_empty(self.facebook_link),
            website: non_empty(self.website),
            genres: split_genres(&self.genres),
            seeking_talent: self.seeking_talent,
            seeking_description: non_empty(self.seeking_description),
        }
    }
}

#[derive(Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// GET /venues
/// Venue listing grouped by city and state
pub async fn list(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let messages = FlashSession::new(&session).take().await?;
    let groups = VenueService::new(&state.db).list_by_city().await?;

    Ok(Html(view::venue::list(&messages, &groups)))
}

/// POST /venues/search
/// Case-insensitive substring search over venue names
pub async fn search(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SearchForm>,
) -> Result<Response, AppError> {
    let flash = FlashSession::new(&session);
    let term = form.search_term.trim();

    match VenueService::new(&state.db).search(term).await {
        Ok(venues) => {
            let messages = flash.take().await?;
            Ok(Html(view::venue::search_results(&messages, term, &venues)).into_response())
        }
        Err(AppError::BadRequest(msg)) => {
            flash.push(msg).await?;
            let messages = flash.take().await?;
            Ok((
                StatusCode::BAD_REQUEST,
                Html(view::error::bad_request(&messages)),
            )
                .into_response())
        }
        Err(err) => Err(err),
    }
}

/// GET /venues/{venue_id}
/// Venue detail page with shows partitioned into past and upcoming
pub async fn detail(
    State(state): State<AppState>,
    session: Session,
    Path(venue_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let details = VenueService::new(&state.db)
        .get_details(venue_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", venue_id)))?;

    // Drained only once the page is going to render, so queued messages
    // survive a failed lookup.
    let messages = FlashSession::new(&session).take().await?;

    Ok(Html(view::venue::detail(&messages, &details)))
}

/// GET /venues/create
/// Blank venue creation form
pub async fn create_form(session: Session) -> Result<impl IntoResponse, AppError> {
    let messages = FlashSession::new(&session).take().await?;

    Ok(Html(view::venue::new_form(&messages)))
}

/// POST /venues/create
/// Creates the venue and renders the home page with a confirmation
pub async fn create_submission(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<VenueForm>,
) -> Result<Response, AppError> {
    let flash = FlashSession::new(&session);
    let name = form.name.clone();

    match VenueRepository::new(&state.db)
        .create(form.into_create_params())
        .await
    {
        Ok(venue) => {
            flash
                .push(format!("Venue {} was successfully listed!", venue.name))
                .await?;
        }
        Err(err) => {
            tracing::error!("Failed to create venue: {}", err);
            flash
                .push(format!(
                    "An error occurred. Venue {} could not be listed.",
                    name
                ))
                .await?;
            let messages = flash.take().await?;
            return Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(view::error::server_error(&messages)),
            )
                .into_response());
        }
    }

    let messages = flash.take().await?;
    Ok(Html(view::home::home(&messages)).into_response())
}

/// DELETE /venues/{venue_id}
/// Deletes the venue and its shows, then returns to the home page
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(venue_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let flash = FlashSession::new(&session);

    match VenueRepository::new(&state.db).delete(venue_id).await {
        Ok(()) => {
            flash.push("Venue deleted!").await?;
        }
        Err(err) => {
            tracing::error!("Failed to delete venue {}: {}", venue_id, err);
            flash.push("Venue could not be deleted!").await?;
        }
    }

    Ok(Redirect::to("/"))
}

/// GET /venues/{venue_id}/edit
/// Venue edit form prefilled with current values
pub async fn edit_form(
    State(state): State<AppState>,
    session: Session,
    Path(venue_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let venue = VenueRepository::new(&state.db)
        .get_by_id(venue_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", venue_id)))?;

    let messages = FlashSession::new(&session).take().await?;

    Ok(Html(view::venue::edit_form(&messages, &venue)))
}

/// POST /venues/{venue_id}/edit
/// Reassigns every venue field from the form, then redirects to the detail page
pub async fn edit_submission(
    State(state): State<AppState>,
    session: Session,
    Path(venue_id): Path<i32>,
    Form(form): Form<VenueForm>,
) -> Result<Response, AppError> {
    let flash = FlashSession::new(&session);

    match VenueRepository::new(&state.db)
        .update(form.into_update_params(venue_id))
        .await
    {
        Ok(_) => {
            flash.push("Venue was successfully updated!").await?;
        }
        Err(sea_orm::DbErr::RecordNotFound(msg)) => {
            return Err(AppError::NotFound(msg));
        }
        Err(err) => {
            tracing::error!("Failed to update venue {}: {}", venue_id, err);
            flash
                .push("An error occurred. Venue could not be updated.")
                .await?;
            let messages = flash.take().await?;
            return Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(view::error::server_error(&messages)),
            )
                .into_response());
        }
    }

    Ok(Redirect::to(&format!("/venues/{}", venue_id)).into_response())
}
