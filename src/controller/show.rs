use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    error::AppError, middleware::flash::FlashSession, service::show::ShowService,
    state::AppState, view,
};

/// Show booking form fields.
#[derive(Deserialize)]
pub struct ShowForm {
    pub artist_id: i32,
    pub venue_id: i32,
    #[serde(default)]
    pub start_time: String,
}

/// GET /shows
/// Show listing with venue and artist names denormalized
pub async fn list(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let messages = FlashSession::new(&session).take().await?;
    let listings = ShowService::new(&state.db).list_all().await?;

    Ok(Html(view::show::list(&messages, &listings)))
}

/// GET /shows/create
/// Blank show booking form
pub async fn create_form(session: Session) -> Result<impl IntoResponse, AppError> {
    let messages = FlashSession::new(&session).take().await?;

    Ok(Html(view::show::new_form(&messages)))
}

/// POST /shows/create
/// Books the show and renders the home page with a confirmation
pub async fn create_submission(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ShowForm>,
) -> Result<Response, AppError> {
    let flash = FlashSession::new(&session);

    match ShowService::new(&state.db)
        .create(form.artist_id, form.venue_id, &form.start_time)
        .await
    {
        Ok(_) => {
            flash.push("Show was successfully listed!").await?;
        }
        Err(AppError::BadRequest(msg)) => {
            flash.push(msg).await?;
            let messages = flash.take().await?;
            return Ok((
                StatusCode::BAD_REQUEST,
                Html(view::error::bad_request(&messages)),
            )
                .into_response());
        }
        Err(err) => {
            tracing::error!("Failed to create show: {}", err);
            flash
                .push("An error occurred. Show could not be listed.")
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
