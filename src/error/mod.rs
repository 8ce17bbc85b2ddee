//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into rendered error pages. The `AppError` enum serves as the
//! top-level error type that wraps infrastructure errors and implements
//! `IntoResponse` for automatic error handling in request handlers.

pub mod config;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::{error::config::ConfigError, view};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and
/// provides automatic conversion to rendered error pages. Most variants use
/// `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in the 500 page with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    ///
    /// Session failures prevent flash message handling, so they surface as
    /// the 500 page rather than silently dropping messages.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in the 404 page. The message is logged, not shown to the client.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in the 400 page with the provided message displayed.
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into rendered error pages.
///
/// Maps `NotFound` to the 404 page and `BadRequest` to the 400 page; every
/// other variant is logged with full details and answered with the generic
/// 500 page to avoid leaking implementation details.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, Html(view::error::not_found(&[]))).into_response()
            }
            Self::BadRequest(msg) => {
                let messages = vec![msg];
                (
                    StatusCode::BAD_REQUEST,
                    Html(view::error::bad_request(&messages)),
                )
                    .into_response()
            }
            err => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(view::error::server_error(&[])),
                )
                    .into_response()
            }
        }
    }
}
