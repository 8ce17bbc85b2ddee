use crate::{
    model::artist::{Artist, ArtistDetails},
    view::{escape, format_datetime, join_genres, layout},
};

/// Renders the flat artist listing.
pub fn list(flash: &[String], artists: &[Artist]) -> String {
    let mut body = String::from(
        "<h1>Artists</h1>\n<p><a href=\"/artists/create\">List a new artist</a></p>\n<ul>\n",
    );

    for artist in artists {
        body.push_str(&format!(
            "<li><a href=\"/artists/{}\">{}</a></li>\n",
            artist.id,
            escape(&artist.name)
        ));
    }
    body.push_str("</ul>\n");

    if artists.is_empty() {
        body.push_str("<p>No artists yet.</p>");
    }

    layout::page("Artists", flash, &body)
}

/// Renders artist search results for the submitted term.
pub fn search_results(flash: &[String], term: &str, artists: &[Artist]) -> String {
    let mut body = format!(
        "<h1>Search Artists</h1>\n{}\n<p>Number of search results for \"{}\": {}</p>\n<ul>\n",
        search_form(),
        escape(term),
        artists.len()
    );

    for artist in artists {
        body.push_str(&format!(
            "<li><a href=\"/artists/{}\">{}</a></li>\n",
            artist.id,
            escape(&artist.name)
        ));
    }
    body.push_str("</ul>\n");

    layout::page("Search Artists", flash, &body)
}

/// Renders the artist detail page with past and upcoming shows.
pub fn detail(flash: &[String], details: &ArtistDetails) -> String {
    let artist = &details.artist;

    let mut body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<p>{}, {}</p>\n<p>{}</p>\n",
        escape(&artist.name),
        escape(&join_genres(&artist.genres)),
        escape(&artist.city),
        escape(&artist.state),
        escape(&artist.phone)
    );

    if let Some(facebook_link) = &artist.facebook_link {
        body.push_str(&format!(
            "<p><a href=\"{0}\">{0}</a></p>\n",
            escape(facebook_link)
        ));
    }
    if artist.seeking_venue {
        body.push_str("<p><strong>Seeking venues</strong></p>\n");
        if let Some(description) = &artist.seeking_description {
            body.push_str(&format!("<p>{}</p>\n", escape(description)));
        }
    }
    if let Some(image_link) = &artist.image_link {
        body.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">\n",
            escape(image_link),
            escape(&artist.name)
        ));
    }

    body.push_str(&format!(
        "<h2>{} Upcoming Shows</h2>\n<ul>\n",
        details.upcoming_shows_count
    ));
    for show in &details.upcoming_shows {
        body.push_str(&format!(
            "<li><a href=\"/venues/{}\">{}</a> at {}</li>\n",
            show.venue_id,
            escape(&show.venue_name),
            format_datetime(&show.start_time)
        ));
    }
    body.push_str(&format!(
        "</ul>\n<h2>{} Past Shows</h2>\n<ul>\n",
        details.past_shows_count
    ));
    for show in &details.past_shows {
        body.push_str(&format!(
            "<li><a href=\"/venues/{}\">{}</a> at {}</li>\n",
            show.venue_id,
            escape(&show.venue_name),
            format_datetime(&show.start_time)
        ));
    }
    body.push_str("</ul>\n");

    body.push_str(&format!(
        "<p><a href=\"/artists/{}/edit\">Edit artist</a></p>\n",
        artist.id
    ));

    layout::page(&artist.name, flash, &body)
}

/// Renders the blank artist creation form.
pub fn new_form(flash: &[String]) -> String {
    let body = format!(
        "<h1>List a new artist</h1>\n{}",
        artist_form("/artists/create", None)
    );

    layout::page("New Artist", flash, &body)
}

/// Renders the artist edit form prefilled with current values.
pub fn edit_form(flash: &[String], artist: &Artist) -> String {
    let body = format!(
        "<h1>Edit artist {}</h1>\n{}",
        escape(&artist.name),
        artist_form(&format!("/artists/{}/edit", artist.id), Some(artist))
    );

    layout::page("Edit Artist", flash, &body)
}

fn search_form() -> String {
    concat!(
        "<form method=\"post\" action=\"/artists/search\">\n",
        "<input type=\"text\" name=\"search_term\" placeholder=\"Find an artist\">\n",
        "<button type=\"submit\">Search</button>\n",
        "</form>"
    )
    .to_string()
}

// The checkbox carries value="true" so the field parses as a bool; an
// unchecked box submits nothing and the form default applies.
fn artist_form(action: &str, artist: Option<&Artist>) -> String {
    let text = |value: Option<&String>| value.map(|v| escape(v)).unwrap_or_default();

    let name = artist.map(|a| escape(&a.name)).unwrap_or_default();
    let city = artist.map(|a| escape(&a.city)).unwrap_or_default();
    let state = artist.map(|a| escape(&a.state)).unwrap_or_default();
    let phone = artist.map(|a| escape(&a.phone)).unwrap_or_default();
    let genres = artist
        .map(|a| escape(&join_genres(&a.genres)))
        .unwrap_or_default();
    let image_link = text(artist.and_then(|a| a.image_link.as_ref()));
    let facebook_link = text(artist.and_then(|a| a.facebook_link.as_ref()));
    let seeking_venue = artist
        .map(|a| if a.seeking_venue { " checked" } else { "" })
        .unwrap_or("");
    let seeking_description = text(artist.and_then(|a| a.seeking_description.as_ref()));

    format!(
        r#"<form method="post" action="{action}">
<label>Name <input type="text" name="name" value="{name}" required></label>
<label>City <input type="text" name="city" value="{city}" required></label>
<label>State <input type="text" name="state" value="{state}" required></label>
<label>Phone <input type="text" name="phone" value="{phone}" required></label>
<label>Genres (comma separated) <input type="text" name="genres" value="{genres}"></label>
<label>Image Link <input type="text" name="image_link" value="{image_link}"></label>
<label>Facebook Link <input type="text" name="facebook_link" value="{facebook_link}"></label>
<label>Seeking Venues <input type="checkbox" name="seeking_venue" value="true"{seeking_venue}></label>
<label>Seeking Description <textarea name="seeking_description">{seeking_description}</textarea></label>
<button type="submit">Save</button>
</form>"#
    )
}
