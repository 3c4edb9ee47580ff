//! Field sanitizing for CSV and HTML output.
//!
//! Lengths are counted in Unicode scalar values, not bytes, so truncation
//! never splits a multi-byte character.

use std::fmt::Display;

const ELLIPSIS: &str = "...";

/// Stringify `value` and cap it at `max_len` characters.
///
/// Values longer than the cap keep their first `max_len - 3` characters
/// followed by `...`.
pub fn truncate(value: impl Display, max_len: usize) -> String {
    let s = value.to_string();
    if s.chars().count() <= max_len {
        return s;
    }
    let ellipsis_len = ELLIPSIS.len().min(max_len);
    let keep = max_len - ellipsis_len;
    let mut out: String = s.chars().take(keep).collect();
    out.push_str(&ELLIPSIS[..ellipsis_len]);
    out
}

/// Escape text for an HTML element body. `&` goes first so the entities
/// introduced for `<` and `>` are not escaped again.
pub fn escape_html_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Make a URL safe for an `href` attribute. Only `&` is rewritten; this is
/// not general URL encoding.
pub fn escape_html_url(url: &str) -> String {
    url.replace('&', "%26")
}

/// Wrap a CSV field in double quotes.
///
/// Embedded double quotes become single quotes; they are not doubled as
/// RFC 4180 would. Output is byte-compatible with earlier reports.
pub fn quote_csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "'"))
}
