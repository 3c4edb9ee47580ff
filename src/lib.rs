//! places-export: Firefox history and bookmark reports
//!
//! Reads a `places.sqlite` profile database read-only, resolves each
//! bookmark's folder path, and renders CSV tables and static HTML pages.

pub mod config;
pub mod domain;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod render;
pub mod resolve;
pub mod sink;
pub mod utils;

pub use domain::{Bookmark, BookmarkSet, Config};
pub use error::{ExportError, Result};
pub use extract::{PlacesSource, SqlitePlaces};
pub use pipeline::{ReportPipeline, ReportView, RunSummary};
pub use resolve::BookmarkResolver;
pub use sink::{DirSink, MemorySink, OutputSink};
