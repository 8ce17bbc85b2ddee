//! Show factory for creating test show entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test shows with customizable fields.
///
/// A show references an existing venue and artist, so both must be created
/// first (see the venue and artist factories, or
/// `helpers::create_show_with_dependencies`).
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::show::ShowFactory;
///
/// let show = ShowFactory::new(&db, artist.id, venue.id)
///     .start_time(Utc::now() - chrono::Duration::days(30))
///     .build()
///     .await?;
/// ```
pub struct ShowFactory<'a> {
    db: &'a DatabaseConnection,
    artist_id: i32,
    venue_id: i32,
    start_time: chrono::DateTime<Utc>,
}

impl<'a> ShowFactory<'a> {
    /// Creates a new ShowFactory with default values.
    ///
    /// Defaults:
    /// - start_time: 1 hour from now (an upcoming show)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `artist_id` - ID of the performing artist
    /// - `venue_id` - ID of the hosting venue
    pub fn new(db: &'a DatabaseConnection, artist_id: i32, venue_id: i32) -> Self {
        Self {
            db,
            artist_id,
            venue_id,
            start_time: Utc::now() + chrono::Duration::hours(1),
        }
    }

    /// Sets the show start time.
    pub fn start_time(mut self, start_time: chrono::DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    /// Builds and inserts the show entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::show::Model)` - Created show entity
    /// - `Err(DbErr)` - Database error during insert (including foreign key
    ///   violations when the artist or venue does not exist)
    pub async fn build(self) -> Result<entity::show::Model, DbErr> {
        entity::show::ActiveModel {
            id: ActiveValue::NotSet,
            artist_id: ActiveValue::Set(self.artist_id),
            venue_id: ActiveValue::Set(self.venue_id),
            start_time: ActiveValue::Set(self.start_time),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a show with default values for the specified artist and venue.
///
/// Shorthand for `ShowFactory::new(db, artist_id, venue_id).build().await`.
pub async fn create_show(
    db: &DatabaseConnection,
    artist_id: i32,
    venue_id: i32,
) -> Result<entity::show::Model, DbErr> {
    ShowFactory::new(db, artist_id, venue_id).build().await
}
