//! Record extraction from a places store.
//!
//! Every view is a fixed read-only query. [`PlacesSource`] is the seam the
//! resolver and pipeline work against; [`SqlitePlaces`] is the real store.

use crate::domain::{FolderNode, PlaceRecord, RawBookmark, VisitRecord};
use crate::error::Result;

pub mod sqlite;

pub use sqlite::SqlitePlaces;

pub trait PlacesSource {
    /// Every visit joined to its place, most recent first.
    fn history(&self) -> Result<Vec<VisitRecord>>;

    /// Distinct places by frecency, highest first, optionally capped.
    fn places_by_frecency(&self, limit: Option<usize>) -> Result<Vec<PlaceRecord>>;

    /// Every bookmark that links to a place.
    fn bookmark_rows(&self) -> Result<Vec<RawBookmark>>;

    /// All rows stored under `folder_id`. Well-formed data yields exactly one.
    fn folder_rows(&self, folder_id: i64) -> Result<Vec<FolderNode>>;
}

impl<T: PlacesSource + ?Sized> PlacesSource for &T {
    fn history(&self) -> Result<Vec<VisitRecord>> {
        (**self).history()
    }

    fn places_by_frecency(&self, limit: Option<usize>) -> Result<Vec<PlaceRecord>> {
        (**self).places_by_frecency(limit)
    }

    fn bookmark_rows(&self) -> Result<Vec<RawBookmark>> {
        (**self).bookmark_rows()
    }

    fn folder_rows(&self, folder_id: i64) -> Result<Vec<FolderNode>> {
        (**self).folder_rows(folder_id)
    }
}
