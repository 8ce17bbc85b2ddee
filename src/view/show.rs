use crate::{
    model::show::ShowListing,
    view::{escape, format_datetime, layout},
};

/// Renders the show listing with venue and artist names on each row.
pub fn list(flash: &[String], listings: &[ShowListing]) -> String {
    let mut body = String::from(
        "<h1>Shows</h1>\n<p><a href=\"/shows/create\">Book a new show</a></p>\n<ul>\n",
    );

    for listing in listings {
        body.push_str(&format!(
            "<li><a href=\"/artists/{}\">{}</a> at <a href=\"/venues/{}\">{}</a> on {}</li>\n",
            listing.artist_id,
            escape(&listing.artist_name),
            listing.venue_id,
            escape(&listing.venue_name),
            format_datetime(&listing.start_time)
        ));
    }
    body.push_str("</ul>\n");

    if listings.is_empty() {
        body.push_str("<p>No shows booked yet.</p>");
    }

    layout::page("Shows", flash, &body)
}

/// Renders the blank show booking form.
pub fn new_form(flash: &[String]) -> String {
    let body = r#"<h1>Book a show</h1>
<form method="post" action="/shows/create">
<label>Artist ID <input type="number" name="artist_id" required></label>
<label>Venue ID <input type="number" name="venue_id" required></label>
<label>Start Time (YYYY-MM-DD HH:MM) <input type="text" name="start_time"></label>
<button type="submit">Book</button>
</form>"#;

    layout::page("Book Show", flash, body)
}
