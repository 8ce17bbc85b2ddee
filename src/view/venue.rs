use crate::{
    model::venue::{CityGroup, Venue, VenueDetails},
    view::{escape, format_datetime, join_genres, layout},
};

/// Renders the venue listing grouped by city and state.
pub fn list(flash: &[String], groups: &[CityGroup]) -> String {
    let mut body = String::from("<h1>Venues</h1>\n<p><a href=\"/venues/create\">List a new venue</a></p>\n");

    if groups.is_empty() {
        body.push_str("<p>No venues yet.</p>");
    }

    for group in groups {
        body.push_str(&format!(
            "<h2>{}, {}</h2>\n<ul>\n",
            escape(&group.city),
            escape(&group.state)
        ));
        for venue in &group.venues {
            body.push_str(&format!(
                "<li><a href=\"/venues/{}\">{}</a> <span>{} upcoming shows</span></li>\n",
                venue.id,
                escape(&venue.name),
                venue.num_upcoming_shows
            ));
        }
        body.push_str("</ul>\n");
    }

    layout::page("Venues", flash, &body)
}

/// Renders venue search results for the submitted term.
pub fn search_results(flash: &[String], term: &str, venues: &[Venue]) -> String {
    let mut body = format!(
        "<h1>Search Venues</h1>\n{}\n<p>Number of search results for \"{}\": {}</p>\n<ul>\n",
        search_form(),
        escape(term),
        venues.len()
    );

    for venue in venues {
        body.push_str(&format!(
            "<li><a href=\"/venues/{}\">{}</a></li>\n",
            venue.id,
            escape(&venue.name)
        ));
    }
    body.push_str("</ul>\n");

    layout::page("Search Venues", flash, &body)
}

/// Renders the venue detail page with past and upcoming shows.
pub fn detail(flash: &[String], details: &VenueDetails) -> String {
    let venue = &details.venue;

    let mut body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<p>{}, {}</p>\n<p>{}</p>\n",
        escape(&venue.name),
        escape(&join_genres(&venue.genres)),
        escape(&venue.city),
        escape(&venue.state),
        escape(&venue.address)
    );

    if let Some(phone) = &venue.phone {
        body.push_str(&format!("<p>{}</p>\n", escape(phone)));
    }
    if let Some(website) = &venue.website {
        body.push_str(&format!(
            "<p><a href=\"{0}\">{0}</a></p>\n",
            escape(website)
        ));
    }
    if let Some(facebook_link) = &venue.facebook_link {
        body.push_str(&format!(
            "<p><a href=\"{0}\">{0}</a></p>\n",
            escape(facebook_link)
        ));
    }
    if venue.seeking_talent {
        body.push_str("<p><strong>Seeking talent</strong></p>\n");
        if let Some(description) = &venue.seeking_description {
            body.push_str(&format!("<p>{}</p>\n", escape(description)));
        }
    }
    if let Some(image_link) = &venue.image_link {
        body.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">\n",
            escape(image_link),
            escape(&venue.name)
        ));
    }

    body.push_str(&format!(
        "<h2>{} Upcoming Shows</h2>\n<ul>\n",
        details.upcoming_shows_count
    ));
    for show in &details.upcoming_shows {
        body.push_str(&format!(
            "<li><a href=\"/artists/{}\">{}</a> at {}</li>\n",
            show.artist_id,
            escape(&show.artist_name),
            format_datetime(&show.start_time)
        ));
    }
    body.push_str(&format!(
        "</ul>\n<h2>{} Past Shows</h2>\n<ul>\n",
        details.past_shows_count
    ));
    for show in &details.past_shows {
        body.push_str(&format!(
            "<li><a href=\"/artists/{}\">{}</a> at {}</li>\n",
            show.artist_id,
            escape(&show.artist_name),
            format_datetime(&show.start_time)
        ));
    }
    body.push_str("</ul>\n");

    body.push_str(&format!(
        "<p><a href=\"/venues/{}/edit\">Edit venue</a></p>\n",
        venue.id
    ));

    layout::page(&venue.name, flash, &body)
}

/// Renders the blank venue creation form.
pub fn new_form(flash: &[String]) -> String {
    let body = format!(
        "<h1>List a new venue</h1>\n{}",
        venue_form("/venues/create", None)
    );

    layout::page("New Venue", flash, &body)
}

/// Renders the venue edit form prefilled with current values.
pub fn edit_form(flash: &[String], venue: &Venue) -> String {
    let body = format!(
        "<h1>Edit venue {}</h1>\n{}",
        escape(&venue.name),
        venue_form(&format!("/venues/{}/edit", venue.id), Some(venue))
    );

    layout::page("Edit Venue", flash, &body)
}

fn search_form() -> String {
    concat!(
        "<form method=\"post\" action=\"/venues/search\">\n",
        "<input type=\"text\" name=\"search_term\" placeholder=\"Find a venue\">\n",
        "<button type=\"submit\">Search</button>\n",
        "</form>"
    )
    .to_string()
}

// The checkbox carries value="true" so the field parses as a bool; an
// unchecked box submits nothing and the form default applies.
fn venue_form(action: &str, venue: Option<&Venue>) -> String {
    let text = |value: Option<&String>| value.map(|v| escape(v)).unwrap_or_default();

    let name = venue.map(|v| escape(&v.name)).unwrap_or_default();
    let city = venue.map(|v| escape(&v.city)).unwrap_or_default();
    let state = venue.map(|v| escape(&v.state)).unwrap_or_default();
    let address = venue.map(|v| escape(&v.address)).unwrap_or_default();
    let phone = text(venue.and_then(|v| v.phone.as_ref()));
    let image_link = text(venue.and_then(|v| v.image_link.as_ref()));
    let facebook_link = text(venue.and_then(|v| v.facebook_link.as_ref()));
    let website = text(venue.and_then(|v| v.website.as_ref()));
    let genres = venue
        .map(|v| escape(&join_genres(&v.genres)))
        .unwrap_or_default();
    let seeking_talent = venue
        .map(|v| if v.seeking_talent { " checked" } else { "" })
        .unwrap_or("");
    let seeking_description = text(venue.and_then(|v| v.seeking_description.as_ref()));

    format!(
        r#"<form method="post" action="{action}">
<label>Name <input type="text" name="name" value="{name}" required></label>
<label>City <input type="text" name="city" value="{city}" required></label>
<label>State <input type="text" name="state" value="{state}" required></label>
<label>Address <input type="text" name="address" value="{address}" required></label>
<label>Phone <input type="text" name="phone" value="{phone}"></label>
<label>Genres (comma separated) <input type="text" name="genres" value="{genres}"></label>
<label>Image Link <input type="text" name="image_link" value="{image_link}"></label>
<label>Facebook Link <input type="text" name="facebook_link" value="{facebook_link}"></label>
<label>Website <input type="text" name="website" value="{website}"></label>
<label>Seeking Talent <input type="checkbox" name="seeking_talent" value="true"{seeking_talent}></label>
<label>Seeking Description <textarea name="seeking_description">{seeking_description}</textarea></label>
<button type="submit">Save</button>
</form>"#
    )
}
