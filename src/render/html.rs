//! Static HTML page rendering.
//!
//! [`LinkItem`] constructors are the only place bookmark and place fields are
//! truncated and escaped for HTML; the render functions substitute fields
//! verbatim.

use crate::domain::{Bookmark, PlaceRecord};
use crate::utils::{escape_html_text, escape_html_url, truncate};

pub const GENERATOR: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

const STYLE: &str = "        body {
            font-family: sans-serif;
            padding: 2rem;
        }
        .bookmark-path {
            color: gray;
        }
        .bookmark-title {
            color: black;
        }
        #footer {
            color: gray;
            font-size: 0.8rem;
        }";

/// One `<li>` entry with every field already made HTML-safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkItem {
    pub path: Option<String>,
    pub title: String,
    pub href: String,
    pub text: String,
}

impl LinkItem {
    pub fn from_bookmark(bookmark: &Bookmark, max_len: usize) -> Self {
        Self {
            path: Some(escape_html_text(&truncate(&bookmark.parent_path, max_len))),
            title: escape_html_text(&truncate(&bookmark.title, max_len)),
            href: escape_html_url(&bookmark.url),
            text: escape_html_text(&truncate(&bookmark.url, max_len)),
        }
    }

    /// Places without a title show their URL in parentheses.
    pub fn from_place(place: &PlaceRecord, max_len: usize) -> Self {
        let title = match place.title.as_deref() {
            Some(title) if !title.is_empty() => truncate(title, max_len),
            _ => truncate(format!("({})", place.url), max_len),
        };
        Self {
            path: None,
            title: escape_html_text(&title),
            href: escape_html_url(&place.url),
            text: escape_html_text(&truncate(&place.url, max_len)),
        }
    }
}

pub fn render_head(title: &str) -> String {
    let title = escape_html_text(title);
    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
    <title>{title}</title>
    <meta http-equiv=\"Content-Type\" content=\"text/html; charset=UTF-8\">
    <meta name=\"generator\" content=\"{GENERATOR}\">
    <style>
{STYLE}
    </style>
</head>
<body>
<h1>{title}</h1>
<ul>
"
    )
}

pub fn render_item(item: &LinkItem) -> String {
    match &item.path {
        Some(path) => format!(
            "        <li>
            <p><span class=\"bookmark-path\">{path}</span><br />
            <span class=\"bookmark-title\">{title}</span><br />
            <a target=\"_blank\" href=\"{href}\">{text}</a></p>
        </li>
",
            title = item.title,
            href = item.href,
            text = item.text,
        ),
        None => format!(
            "        <li>
            <p>{title}<br />
            <a target=\"_blank\" href=\"{href}\">{text}</a></p>
        </li>
",
            title = item.title,
            href = item.href,
            text = item.text,
        ),
    }
}

/// Closing markup. The page carries exactly one `id="footer"` element.
pub fn render_tail(generated_at: Option<&str>) -> String {
    let stamp = match generated_at {
        Some(ts) => format!("Generated by {GENERATOR} at {}", escape_html_text(ts)),
        None => format!("Generated by {GENERATOR}"),
    };
    format!(
        "</ul>
<p>&nbsp;</p>
<hr>
<p id=\"footer\">{stamp}</p>
</body>
</html>
"
    )
}

pub fn render_page(title: &str, items: &[LinkItem], generated_at: Option<&str>) -> String {
    let mut out = render_head(title);
    for item in items {
        out.push_str(&render_item(item));
    }
    out.push_str(&render_tail(generated_at));
    out
}
