use crate::view::layout;

/// Renders the 404 page.
pub fn not_found(flash: &[String]) -> String {
    let body = r#"<h1>Page not found</h1>
<p>The page you were looking for does not exist.</p>
<p><a href="/">Back to home</a></p>"#;

    layout::page("Not Found", flash, body)
}

/// Renders the 400 page shown for invalid submissions.
pub fn bad_request(flash: &[String]) -> String {
    let body = r#"<h1>Invalid request</h1>
<p><a href="/">Back to home</a></p>"#;

    layout::page("Invalid Request", flash, body)
}

/// Renders the generic 500 page.
pub fn server_error(flash: &[String]) -> String {
    let body = r#"<h1>Something went wrong</h1>
<p>An unexpected error occurred. Please try again.</p>
<p><a href="/">Back to home</a></p>"#;

    layout::page("Server Error", flash, body)
}
