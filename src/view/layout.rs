use crate::view::escape;

/// Wraps page content in the shared layout with navigation and flash block.
pub fn page(title: &str, flash: &[String], body: &str) -> String {
    let mut flash_block = String::new();
    if !flash.is_empty() {
        flash_block.push_str("<ul class=\"flash\">");
        for message in flash {
            flash_block.push_str(&format!("<li>{}</li>", escape(message)));
        }
        flash_block.push_str("</ul>");
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} | Showboard</title>
</head>
<body>
<nav>
<a href="/">Showboard</a>
<a href="/venues">Venues</a>
<a href="/artists">Artists</a>
<a href="/shows">Shows</a>
</nav>
{flash_block}
<main>
{body}
</main>
</body>
</html>"#,
        title = escape(title),
        flash_block = flash_block,
        body = body,
    )
}
