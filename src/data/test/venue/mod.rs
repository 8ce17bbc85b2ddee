use crate::{
    data::venue::VenueRepository,
    model::venue::{CreateVenueParams, UpdateVenueParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod update;
