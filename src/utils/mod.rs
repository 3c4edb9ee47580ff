//! Shared helpers

pub mod sanitize;
pub mod time;

pub use sanitize::{escape_html_text, escape_html_url, quote_csv_field, truncate};
pub use time::{format_visit_time, generated_at};
