use crate::view::layout;

/// Renders the landing page.
pub fn home(flash: &[String]) -> String {
    let body = r#"<h1>Showboard</h1>
<p>Book local artists and venues.</p>
<ul>
<li><a href="/venues">Find a venue</a> or <a href="/venues/create">list a new venue</a></li>
<li><a href="/artists">Find an artist</a> or <a href="/artists/create">list a new artist</a></li>
<li><a href="/shows">Browse shows</a> or <a href="/shows/create">book a new show</a></li>
</ul>"#;

    layout::page("Home", flash, body)
}
