use crate::{
    controller::artist::detail, error::AppError, middleware::flash::FlashSession, state::AppState,
};
use axum::extract::{Path, State};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod detail;
