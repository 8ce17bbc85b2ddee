use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    data::artist::ArtistRepository,
    error::AppError,
    middleware::flash::FlashSession,
    model::artist::{CreateArtistParams, UpdateArtistParams},
    service::artist::ArtistService,
    state::AppState,
    util::parse::{non_empty, split_genres},
    view,
};

/// Artist form fields as submitted by the create and edit pages.
#[derive(Deserialize)]
pub struct ArtistForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub genres: String,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub seeking_venue: bool,
    #[serde(default)]
    pub seeking_description: String,
}

impl ArtistForm {
    fn into_create_params(self) -> CreateArtistParams {
        CreateArtistParams {
            name: self.name,
            city: self.city,
            state: self.state,
            phone: self.phone,
            genres: split_genres(&self.genres),
            image_link: non_empty(self.image_link),
            facebook_link: non_empty(self.facebook_link),
            seeking_venue: self.seeking_venue,
            seeking_description: non_empty(self.seeking_description),
        }
    }

    fn into_update_params(self, id: i32) -> UpdateArtistParams {
        UpdateArtistParams {
            id,
            name: self.name,
            city: self.city,
            state: self.state,
            phone: self.phone,
            genres: split_genres(&self.genres),
            image_link: non_empty(self.image_link),
            facebook_link: non_empty(self.facebook_link),
            seeking_venue: self.seeking_venue,
            seeking_description: non_empty(self.seeking_description),
        }
    }
}

#[derive(Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// GET /artists
/// Flat artist listing
pub async fn list(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let messages = FlashSession::new(&session).take().await?;
    let artists = ArtistRepository::new(&state.db).get_all().await?;

    Ok(Html(view::artist::list(&messages, &artists)))
}

/// POST /artists/search
/// Case-insensitive substring search over artist names
pub async fn search(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SearchForm>,
) -> Result<Response, AppError> {
    let flash = FlashSession::new(&session);
    let term = form.search_term.trim();

    match ArtistService::new(&state.db).search(term).await {
        Ok(artists) => {
            let messages = flash.take().await?;
            Ok(Html(view::artist::search_results(&messages, term, &artists)).into_response())
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

/// GET /artists/{artist_id}
/// Artist detail page with shows partitioned into past and upcoming
pub async fn detail(
    State(state): State<AppState>,
    session: Session,
    Path(artist_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let details = ArtistService::new(&state.db)
        .get_details(artist_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Artist {} not found", artist_id)))?;

    // Drained only once the page is going to render, so queued messages
    // survive a failed lookup.
    let messages = FlashSession::new(&session).take().await?;

    Ok(Html(view::artist::detail(&messages, &details)))
}

/// GET /artists/create
/// Blank artist creation form
pub async fn create_form(session: Session) -> Result<impl IntoResponse, AppError> {
    let messages = FlashSession::new(&session).take().await?;

    Ok(Html(view::artist::new_form(&messages)))
}

/// POST /artists/create
/// Creates the artist and renders the home page with a confirmation
pub async fn create_submission(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ArtistForm>,
) -> Result<Response, AppError> {
    let flash = FlashSession::new(&session);
    let name = form.name.clone();

    match ArtistRepository::new(&state.db)
        .create(form.into_create_params())
        .await
    {
        Ok(artist) => {
            flash
                .push(format!("Artiste {} was successfully listed!", artist.name))
                .await?;
        }
        Err(err) => {
            tracing::error!("Failed to create artist: {}", err);
            flash
                .push(format!(
                    "An error occurred. Artiste {} could not be listed.",
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

/// GET /artists/{artist_id}/edit
/// Artist edit form prefilled with current values
pub async fn edit_form(
    State(state): State<AppState>,
    session: Session,
    Path(artist_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let artist = ArtistRepository::new(&state.db)
        .get_by_id(artist_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Artist {} not found", artist_id)))?;

    let messages = FlashSession::new(&session).take().await?;

    Ok(Html(view::artist::edit_form(&messages, &artist)))
}

/// POST /artists/{artist_id}/edit
/// Reassigns every artist field from the form, then redirects to the detail page
pub async fn edit_submission(
    State(state): State<AppState>,
    session: Session,
    Path(artist_id): Path<i32>,
    Form(form): Form<ArtistForm>,
) -> Result<Response, AppError> {
    let flash = FlashSession::new(&session);

    match ArtistRepository::new(&state.db)
        .update(form.into_update_params(artist_id))
        .await
    {
        Ok(_) => {
            flash.push("Artist was successfully updated!").await?;
        }
        Err(sea_orm::DbErr::RecordNotFound(msg)) => {
            return Err(AppError::NotFound(msg));
        }
        Err(err) => {
            tracing::error!("Failed to update artist {}: {}", artist_id, err);
            flash
                .push("An error occurred. Artist could not be updated.")
                .await?;
            let messages = flash.take().await?;
            return Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(view::error::server_error(&messages)),
            )
                .into_response());
        }
    }

    Ok(Redirect::to(&format!("/artists/{}", artist_id)).into_response())
}
