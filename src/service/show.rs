use chrono::{DateTime, NaiveDateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::show::ShowRepository,
    error::AppError,
    model::show::{CreateShowParams, Show, ShowListing},
};

pub struct ShowService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShowService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every show with venue and artist fields denormalized for the
    /// listing page.
    pub async fn list_all(&self) -> Result<Vec<ShowListing>, AppError> {
        let repo = ShowRepository::new(self.db);

        Ok(repo.get_all_with_details().await?)
    }

    /// Books a new show.
    ///
    /// # Arguments
    /// - `artist_id` - ID of the performing artist
    /// - `venue_id` - ID of the hosting venue
    /// - `start_time` - Form value in "YYYY-MM-DD HH:MM" format, with an
    ///   optional seconds component; blank means now
    ///
    /// # Returns
    /// - `Ok(Show)` - The created booking
    /// - `Err(AppError::BadRequest)` - Unparseable start time
    /// - `Err(AppError)` - Database error, including a missing artist or venue
    pub async fn create(
        &self,
        artist_id: i32,
        venue_id: i32,
        start_time: &str,
    ) -> Result<Show, AppError> {
        let repo = ShowRepository::new(self.db);

        let start_time = Self::parse_start_time(start_time)?;

        Ok(repo
            .create(CreateShowParams {
                artist_id,
                venue_id,
                start_time,
            })
            .await?)
    }

    /// Parses a show start time from the form's datetime format.
    ///
    /// Accepts "YYYY-MM-DD HH:MM" and "YYYY-MM-DD HH:MM:SS". A blank value
    /// defaults to the current time, matching the form's prefilled default.
    fn parse_start_time(value: &str) -> Result<DateTime<Utc>, AppError> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Ok(Utc::now());
        }

        let naive = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M")
            .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S"))
            .map_err(|_| {
                AppError::BadRequest(format!(
                    "Invalid start time '{}', expected YYYY-MM-DD HH:MM",
                    trimmed
                ))
            })?;

        Ok(DateTime::from_naive_utc_and_offset(naive, Utc))
    }
}
