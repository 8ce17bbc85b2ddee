//! Domain models for artist data operations.

use crate::model::show::VenueBooking;

/// A performer who can be booked for shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Artist {
    /// Unique identifier for the artist.
    pub id: i32,
    /// Display name of the artist or band.
    pub name: String,
    /// City the artist is based in.
    pub city: String,
    /// State the artist is based in.
    pub state: String,
    /// Contact phone number.
    pub phone: String,
    /// Genres the artist performs.
    pub genres: Vec<String>,
    /// Optional image URL for the artist page.
    pub image_link: Option<String>,
    /// Optional Facebook page URL.
    pub facebook_link: Option<String>,
    /// Whether the artist is currently looking for venues to perform at.
    pub seeking_venue: bool,
    /// Free-form description of what the artist is looking for.
    pub seeking_description: Option<String>,
}

impl Artist {
    /// Converts an entity model to an artist domain model at the repository boundary.
    pub fn from_entity(entity: entity::artist::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            city: entity.city,
            state: entity.state,
            phone: entity.phone,
            genres: crate::model::genres_from_json(entity.genres),
            image_link: entity.image_link,
            facebook_link: entity.facebook_link,
            seeking_venue: entity.seeking_venue,
            seeking_description: entity.seeking_description,
        }
    }
}

/// Parameters for creating a new artist.
#[derive(Debug, Clone)]
pub struct CreateArtistParams {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Parameters for updating an existing artist.
///
/// Every field is reassigned on update; there is no partial-update form.
#[derive(Debug, Clone)]
pub struct UpdateArtistParams {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Artist detail page data: the artist plus their shows partitioned around now.
#[derive(Debug, Clone)]
pub struct ArtistDetails {
    pub artist: Artist,
    pub past_shows: Vec<VenueBooking>,
    pub upcoming_shows: Vec<VenueBooking>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}
