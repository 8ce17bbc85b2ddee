use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::show::{ArtistBooking, CreateShowParams, Show, ShowListing, VenueBooking};

/// Repository providing database operations for show bookings.
pub struct ShowRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShowRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new show booking.
    ///
    /// # Returns
    /// - `Ok(Show)` - The created show with generated ID
    /// - `Err(DbErr)` - Database error, including foreign key failure when the
    ///   referenced artist or venue does not exist
    pub async fn create(&self, params: CreateShowParams) -> Result<Show, DbErr> {
        let entity = entity::show::ActiveModel {
            artist_id: ActiveValue::Set(params.artist_id),
            venue_id: ActiveValue::Set(params.venue_id),
            start_time: ActiveValue::Set(params.start_time),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Show::from_entity(entity))
    }

    /// Gets all shows for a venue with the artist side denormalized, ordered
    /// by start time.
    pub async fn get_for_venue(&self, venue_id: i32) -> Result<Vec<ArtistBooking>, DbErr> {
        let rows = entity::prelude::Show::find()
            .filter(entity::show::Column::VenueId.eq(venue_id))
            .find_also_related(entity::prelude::Artist)
            .order_by_asc(entity::show::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(show, artist)| {
                artist.map(|artist| ArtistBooking {
                    artist_id: artist.id,
                    artist_name: artist.name,
                    artist_image_link: artist.image_link,
                    start_time: show.start_time,
                })
            })
            .collect())
    }

    /// Gets all shows for an artist with the venue side denormalized, ordered
    /// by start time.
    pub async fn get_for_artist(&self, artist_id: i32) -> Result<Vec<VenueBooking>, DbErr> {
        let rows = entity::prelude::Show::find()
            .filter(entity::show::Column::ArtistId.eq(artist_id))
            .find_also_related(entity::prelude::Venue)
            .order_by_asc(entity::show::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(show, venue)| {
                venue.map(|venue| VenueBooking {
                    venue_id: venue.id,
                    venue_name: venue.name,
                    venue_image_link: venue.image_link,
                    start_time: show.start_time,
                })
            })
            .collect())
    }

    /// Counts a venue's shows starting strictly after the given time.
    pub async fn count_upcoming_for_venue(
        &self,
        venue_id: i32,
        now: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        entity::prelude::Show::find()
            .filter(entity::show::Column::VenueId.eq(venue_id))
            .filter(entity::show::Column::StartTime.gt(now))
            .count(self.db)
            .await
    }

    /// Gets every show with both the venue and artist sides denormalized, for
    /// the show listing page. Ordered by start time.
    pub async fn get_all_with_details(&self) -> Result<Vec<ShowListing>, DbErr> {
        let rows = entity::prelude::Show::find()
            .find_also_related(entity::prelude::Venue)
            .order_by_asc(entity::show::Column::StartTime)
            .all(self.db)
            .await?;

        let artists: HashMap<i32, entity::artist::Model> = entity::prelude::Artist::find()
            .all(self.db)
            .await?
            .into_iter()
            .map(|artist| (artist.id, artist))
            .collect();

        Ok(rows
            .into_iter()
            .filter_map(|(show, venue)| {
                let venue = venue?;
                let artist = artists.get(&show.artist_id)?;

                Some(ShowListing {
                    venue_id: venue.id,
                    venue_name: venue.name,
                    artist_id: artist.id,
                    artist_name: artist.name.clone(),
                    artist_image_link: artist.image_link.clone(),
                    start_time: show.start_time,
                })
            })
            .collect())
    }
}
