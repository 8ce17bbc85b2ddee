//! Showboard: a venue/artist/show booking directory.
//!
//! A server-rendered CRUD web application over three related tables. The
//! backend follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and form binding
//! - **Service Layer** (`service/`) - Business logic: city aggregation, past/upcoming
//!   show partitioning, show listing denormalization
//! - **Data Layer** (`data/`) - Database repositories and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and operation parameter types
//! - **View Layer** (`view/`) - Server-side HTML page rendering
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Typed session wrapper for flash messages

mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod router;
mod service;
mod startup;
mod state;
mod util;
mod view;

use tower_http::trace::TraceLayer;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "showboard=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session_layer = startup::connect_to_session(&db).await?;

    let app = router::router()
        .with_state(AppState::new(db))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
