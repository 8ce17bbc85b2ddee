//! Form field parsing helpers.
//!
//! HTML forms submit every field as a string, with absent optional inputs
//! arriving as empty strings. These helpers normalize that surface into the
//! domain parameter types.

/// Converts a form field to `None` when blank, trimming whitespace otherwise.
pub fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Splits a comma-separated genres field into trimmed, non-empty entries.
pub fn split_genres(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|genre| !genre.is_empty())
        .map(str::to_string)
        .collect()
}
