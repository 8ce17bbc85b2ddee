//! Domain models for show data operations.
//!
//! A show is a join entity with no independent lifecycle meaning: it exists
//! only to associate one artist with one venue at one time. The booking
//! types here carry the denormalized counterpart fields the detail and
//! listing pages display.

use chrono::{DateTime, Utc};

/// A scheduled booking of one artist at one venue at a given time.
#[derive(Debug, Clone, PartialEq)]
pub struct Show {
    pub id: i32,
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: DateTime<Utc>,
}

impl Show {
    /// Converts an entity model to a show domain model at the repository boundary.
    pub fn from_entity(entity: entity::show::Model) -> Self {
        Self {
            id: entity.id,
            artist_id: entity.artist_id,
            venue_id: entity.venue_id,
            start_time: entity.start_time,
        }
    }
}

/// Parameters for creating a new show.
#[derive(Debug, Clone)]
pub struct CreateShowParams {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: DateTime<Utc>,
}

/// The artist side of a show, as displayed on the venue detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistBooking {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// The venue side of a show, as displayed on the artist detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct VenueBooking {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// One row of the show listing page, with denormalized venue and artist fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowListing {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}
