//! Artist factory for creating test artist entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test artists with customizable fields.
///
/// Provides a builder pattern for creating artist entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::artist::ArtistFactory;
///
/// let artist = ArtistFactory::new(&db)
///     .name("The Wild Sax Band")
///     .build()
///     .await?;
/// ```
pub struct ArtistFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    city: String,
    state: String,
    phone: String,
    genres: Vec<String>,
    image_link: Option<String>,
    facebook_link: Option<String>,
    seeking_venue: bool,
    seeking_description: Option<String>,
}

impl<'a> ArtistFactory<'a> {
    /// Creates a new ArtistFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Artist {id}"` where id is auto-incremented
    /// - city: `"San Francisco"`, state: `"CA"`
    /// - genres: `["Rock"]`
    /// - image_link: a placeholder image URL
    /// - seeking_venue: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Artist {}", id),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "415-555-5678".to_string(),
            genres: vec!["Rock".to_string()],
            image_link: Some(format!("https://example.com/artists/{}.jpg", id)),
            facebook_link: None,
            seeking_venue: false,
            seeking_description: None,
        }
    }

    /// Sets the artist name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the artist city.
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Sets the artist state.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Sets the artist phone number.
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the artist genres.
    pub fn genres(mut self, genres: Vec<String>) -> Self {
        self.genres = genres;
        self
    }

    /// Sets the artist image link.
    pub fn image_link(mut self, image_link: Option<String>) -> Self {
        self.image_link = image_link;
        self
    }

    /// Sets whether the artist is seeking a venue.
    pub fn seeking_venue(mut self, seeking_venue: bool) -> Self {
        self.seeking_venue = seeking_venue;
        self
    }

    /// Sets the seeking description.
    pub fn seeking_description(mut self, seeking_description: Option<String>) -> Self {
        self.seeking_description = seeking_description;
        self
    }

    /// Builds and inserts the artist entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::artist::Model)` - Created artist entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::artist::Model, DbErr> {
        entity::artist::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            city: ActiveValue::Set(self.city),
            state: ActiveValue::Set(self.state),
            phone: ActiveValue::Set(self.phone),
            genres: ActiveValue::Set(serde_json::json!(self.genres)),
            image_link: ActiveValue::Set(self.image_link),
            facebook_link: ActiveValue::Set(self.facebook_link),
            seeking_venue: ActiveValue::Set(self.seeking_venue),
            seeking_description: ActiveValue::Set(self.seeking_description),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an artist with default values.
///
/// Shorthand for `ArtistFactory::new(db).build().await`.
pub async fn create_artist(db: &DatabaseConnection) -> Result<entity::artist::Model, DbErr> {
    ArtistFactory::new(db).build().await
}
