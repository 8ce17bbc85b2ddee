use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};
use tower_sessions::Session;

use crate::{error::AppError, middleware::flash::FlashSession, view};

/// GET /
/// Landing page with any pending flash messages
pub async fn index(session: Session) -> Result<impl IntoResponse, AppError> {
    let messages = FlashSession::new(&session).take().await?;

    Ok(Html(view::home::home(&messages)))
}

/// Fallback for unmatched routes
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(view::error::not_found(&[])))
}
