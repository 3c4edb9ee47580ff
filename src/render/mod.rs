//! Output rendering (CSV tables, HTML pages, run manifest)

pub mod csv;
pub mod html;
pub mod report;

pub use csv::render_csv;
pub use html::{render_page, LinkItem};
pub use report::render_report;
