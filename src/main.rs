//! places-export: Export Firefox browsing history and bookmarks
//!
//! Turns a `places.sqlite` profile database into CSV tables and static HTML
//! pages for inspection or archiving.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
