//! Venue factory for creating test venue entities.
//!
//! This module provides factory methods for creating venue entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test venues with customizable fields.
///
/// Provides a builder pattern for creating venue entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::venue::VenueFactory;
///
/// let venue = VenueFactory::new(&db)
///     .name("The Musical Hop")
///     .city("San Francisco")
///     .build()
///     .await?;
/// ```
pub struct VenueFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    city: String,
    state: String,
    address: String,
    phone: Option<String>,
    image_link: Option<String>,
    facebook_link: Option<String>,
    website: Option<String>,
    genres: Vec<String>,
    seeking_talent: bool,
    seeking_description: Option<String>,
}

impl<'a> VenueFactory<'a> {
    /// Creates a new VenueFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Venue {id}"` where id is auto-incremented
    /// - city: `"San Francisco"`, state: `"CA"`, address: `"{id} Main St"`
    /// - genres: `["Rock"]`
    /// - seeking_talent: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Venue {}", id),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: format!("{} Main St", id),
            phone: Some("415-555-1234".to_string()),
            image_link: None,
            facebook_link: None,
            website: None,
            genres: vec!["Rock".to_string()],
            seeking_talent: false,
            seeking_description: None,
        }
    }

    /// Sets the venue name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the venue city.
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Sets the venue state.
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    /// Sets the venue street address.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Sets the venue phone number.
    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    /// Sets the venue image link.
    pub fn image_link(mut self, image_link: Option<String>) -> Self {
        self.image_link = image_link;
        self
    }

    /// Sets the venue genres.
    pub fn genres(mut self, genres: Vec<String>) -> Self {
        self.genres = genres;
        self
    }

    /// Sets whether the venue is seeking talent.
    pub fn seeking_talent(mut self, seeking_talent: bool) -> Self {
        self.seeking_talent = seeking_talent;
        self
    }

    /// Sets the seeking description.
    pub fn seeking_description(mut self, seeking_description: Option<String>) -> Self {
        self.seeking_description = seeking_description;
        self
    }

    /// Builds and inserts the venue entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::venue::Model)` - Created venue entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::venue::Model, DbErr> {
        entity::venue::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            city: ActiveValue::Set(self.city),
            state: ActiveValue::Set(self.state),
            address: ActiveValue::Set(self.address),
            phone: ActiveValue::Set(self.phone),
            image_link: ActiveValue::Set(self.image_link),
            facebook_link: ActiveValue::Set(self.facebook_link),
            website: ActiveValue::Set(self.website),
            genres: ActiveValue::Set(Some(serde_json::json!(self.genres))),
            seeking_talent: ActiveValue::Set(self.seeking_talent),
            seeking_description: ActiveValue::Set(self.seeking_description),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a venue with default values.
///
/// Shorthand for `VenueFactory::new(db).build().await`.
pub async fn create_venue(db: &DatabaseConnection) -> Result<entity::venue::Model, DbErr> {
    VenueFactory::new(db).build().await
}
