//! Domain models for venue data operations.

use crate::model::show::ArtistBooking;

/// A place that can host shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    /// Unique identifier for the venue.
    pub id: i32,
    /// Display name of the venue.
    pub name: String,
    /// City the venue is located in.
    pub city: String,
    /// State the venue is located in.
    pub state: String,
    /// Street address of the venue.
    pub address: String,
    /// Optional contact phone number.
    pub phone: Option<String>,
    /// Optional image URL for the venue page.
    pub image_link: Option<String>,
    /// Optional Facebook page URL.
    pub facebook_link: Option<String>,
    /// Optional website URL.
    pub website: Option<String>,
    /// Genres the venue hosts.
    pub genres: Vec<String>,
    /// Whether the venue is currently looking for performers.
    pub seeking_talent: bool,
    /// Free-form description of what the venue is looking for.
    pub seeking_description: Option<String>,
}

impl Venue {
    /// Converts an entity model to a venue domain model at the repository boundary.
    pub fn from_entity(entity: entity::venue::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            city: entity.city,
            state: entity.state,
            address: entity.address,
            phone: entity.phone,
            image_link: entity.image_link,
            facebook_link: entity.facebook_link,
            website: entity.website,
            genres: entity
                .genres
                .map(crate::model::genres_from_json)
                .unwrap_or_default(),
            seeking_talent: entity.seeking_talent,
            seeking_description: entity.seeking_description,
        }
    }
}

/// Parameters for creating a new venue.
#[derive(Debug, Clone)]
pub struct CreateVenueParams {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Parameters for updating an existing venue.
///
/// Every field is reassigned on update; there is no partial-update form.
#[derive(Debug, Clone)]
pub struct UpdateVenueParams {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// One venue row in the grouped city listing.
#[derive(Debug, Clone, PartialEq)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    /// Count of this venue's shows starting strictly after the listing time.
    pub num_upcoming_shows: u64,
}

/// All venues sharing a (city, state) pair, for the grouped listing page.
#[derive(Debug, Clone, PartialEq)]
pub struct CityGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// Venue detail page data: the venue plus its shows partitioned around now.
#[derive(Debug, Clone)]
pub struct VenueDetails {
    pub venue: Venue,
    pub past_shows: Vec<ArtistBooking>,
    pub upcoming_shows: Vec<ArtistBooking>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}
