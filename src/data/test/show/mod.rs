use crate::{data::show::ShowRepository, model::show::CreateShowParams};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod count_upcoming_for_venue;
mod create;
mod get_all_with_details;
