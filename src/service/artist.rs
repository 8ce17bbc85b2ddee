use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::{artist::ArtistRepository, show::ShowRepository},
    error::AppError,
    model::artist::{Artist, ArtistDetails},
};

pub struct ArtistService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArtistService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches artists by name.
    ///
    /// # Arguments
    /// - `term` - Raw search term from the form; surrounding whitespace is
    ///   ignored
    ///
    /// # Returns
    /// - `Ok(artists)` - Artists whose names contain the term, case-insensitively
    /// - `Err(AppError::BadRequest)` - Blank term; no query is issued
    /// - `Err(AppError)` - Database error
    pub async fn search(&self, term: &str) -> Result<Vec<Artist>, AppError> {
        let term = term.trim();

        if term.is_empty() {
            return Err(AppError::BadRequest(
                "please enter a search query !".to_string(),
            ));
        }

        Ok(ArtistRepository::new(self.db).search_by_name(term).await?)
    }

    /// Builds the artist detail page data.
    ///
    /// The artist's shows are partitioned around now: shows starting strictly
    /// after now are upcoming, everything else is past.
    ///
    /// # Returns
    /// - `Ok(Some(ArtistDetails))` - The artist with their partitioned shows
    /// - `Ok(None)` - No artist exists with the specified ID
    /// - `Err(AppError)` - Database error
    pub async fn get_details(&self, id: i32) -> Result<Option<ArtistDetails>, AppError> {
        let artist_repo = ArtistRepository::new(self.db);
        let show_repo = ShowRepository::new(self.db);

        let Some(artist) = artist_repo.get_by_id(id).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        let (upcoming_shows, past_shows): (Vec<_>, Vec<_>) = show_repo
            .get_for_artist(id)
            .await?
            .into_iter()
            .partition(|booking| booking.start_time > now);

        Ok(Some(ArtistDetails {
            artist,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }))
    }
}
