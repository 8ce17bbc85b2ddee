use std::collections::BTreeMap;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::{show::ShowRepository, venue::VenueRepository},
    error::AppError,
    model::venue::{CityGroup, Venue, VenueDetails, VenueSummary},
};

pub struct VenueService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VenueService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the grouped venue listing.
    ///
    /// Every venue appears under its (city, state) pair with its own count
    /// of upcoming shows; venues without upcoming shows are included with a
    /// count of zero.
    ///
    /// # Returns
    /// - `Ok(groups)` - City groups in (city, state) order
    /// - `Err(AppError)` - Database error
    pub async fn list_by_city(&self) -> Result<Vec<CityGroup>, AppError> {
        let venue_repo = VenueRepository::new(self.db);
        let show_repo = ShowRepository::new(self.db);
        let now = Utc::now();

        let venues = venue_repo.get_all().await?;

        let mut groups: BTreeMap<(String, String), Vec<VenueSummary>> = BTreeMap::new();
        for venue in venues {
            let num_upcoming_shows = show_repo.count_upcoming_for_venue(venue.id, now).await?;

            groups
                .entry((venue.city.clone(), venue.state.clone()))
                .or_default()
                .push(VenueSummary {
                    id: venue.id,
                    name: venue.name,
                    num_upcoming_shows,
                });
        }

        Ok(groups
            .into_iter()
            .map(|((city, state), venues)| CityGroup {
                city,
                state,
                venues,
            })
            .collect())
    }

    /// Searches venues by name.
    ///
    /// # Arguments
    /// - `term` - Raw search term from the form; surrounding whitespace is
    ///   ignored
    ///
    /// # Returns
    /// - `Ok(venues)` - Venues whose names contain the term, case-insensitively
    /// - `Err(AppError::BadRequest)` - Blank term; no query is issued
    /// - `Err(AppError)` - Database error
    pub async fn search(&self, term: &str) -> Result<Vec<Venue>, AppError> {
        let term = term.trim();

        if term.is_empty() {
            return Err(AppError::BadRequest(
                "please enter a search query !".to_string(),
            ));
        }

        Ok(VenueRepository::new(self.db).search_by_name(term).await?)
    }

    /// Builds the venue detail page data.
    ///
    /// The venue's shows are partitioned around now: shows starting strictly
    /// after now are upcoming, everything else is past.
    ///
    /// # Returns
    /// - `Ok(Some(VenueDetails))` - The venue with its partitioned shows
    /// - `Ok(None)` - No venue exists with the specified ID
    /// - `Err(AppError)` - Database error
    pub async fn get_details(&self, id: i32) -> Result<Option<VenueDetails>, AppError> {
        let venue_repo = VenueRepository::new(self.db);
        let show_repo = ShowRepository::new(self.db);

        let Some(venue) = venue_repo.get_by_id(id).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        let (upcoming_shows, past_shows): (Vec<_>, Vec<_>) = show_repo
            .get_for_venue(id)
            .await?
            .into_iter()
            .partition(|booking| booking.start_time > now);

        Ok(Some(VenueDetails {
            venue,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }))
    }
}
