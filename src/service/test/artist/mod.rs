use crate::{error::AppError, service::artist::ArtistService};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_details;
mod search;
