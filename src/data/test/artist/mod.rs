use crate::{
    data::artist::ArtistRepository,
    model::artist::{CreateArtistParams, UpdateArtistParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id;
mod search_by_name;
