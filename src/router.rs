use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    controller::{artist, home, show, venue},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/venues", get(venue::list))
        .route("/venues/search", post(venue::search))
        .route(
            "/venues/create",
            get(venue::create_form).post(venue::create_submission),
        )
        .route("/venues/{venue_id}", get(venue::detail).delete(venue::delete))
        .route(
            "/venues/{venue_id}/edit",
            get(venue::edit_form).post(venue::edit_submission),
        )
        .route("/artists", get(artist::list))
        .route("/artists/search", post(artist::search))
        .route(
            "/artists/create",
            get(artist::create_form).post(artist::create_submission),
        )
        .route("/artists/{artist_id}", get(artist::detail))
        .route(
            "/artists/{artist_id}/edit",
            get(artist::edit_form).post(artist::edit_submission),
        )
        .route("/shows", get(show::list))
        .route(
            "/shows/create",
            get(show::create_form).post(show::create_submission),
        )
        .fallback(home::not_found)
}
