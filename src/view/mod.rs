//! Server-rendered HTML pages.
//!
//! Each function builds a complete page as a string, wrapped by
//! `layout::page` which supplies the shared chrome and the flash message
//! block. Handlers return these through `axum::response::Html`.

pub mod artist;
pub mod error;
pub mod home;
pub mod layout;
pub mod show;
pub mod venue;

use chrono::{DateTime, Utc};

/// Escapes text for safe interpolation into HTML content and attributes.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// Formats a show start time for display on detail and listing pages.
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%d-%m-%Y %H:%M:%S").to_string()
}

/// Renders a genre list as comma-separated text for display and form values.
pub fn join_genres(genres: &[String]) -> String {
    genres.join(", ")
}
