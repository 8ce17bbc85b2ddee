//! Domain models and operation parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary; the JSON genres column is unpacked into a plain
//! string list here so nothing above the data layer deals with raw JSON.

pub mod artist;
pub mod show;
pub mod venue;

/// Unpacks the JSON genres column into a list of genre names.
///
/// Malformed values deserialize to an empty list rather than failing the
/// whole row.
pub(crate) fn genres_from_json(value: serde_json::Value) -> Vec<String> {
    serde_json::from_value(value).unwrap_or_default()
}

/// Packs a list of genre names into the JSON genres column representation.
pub(crate) fn genres_to_json(genres: &[String]) -> serde_json::Value {
    serde_json::json!(genres)
}
