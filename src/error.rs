//! Error taxonomy for extraction and reporting.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExportError>;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Cannot find {}", path.display())]
    NotFound { path: PathBuf },

    /// The folder chain never reached the root within `limit` hops.
    #[error("folder tree deeper than {limit} levels (or cyclic) starting at folder {folder_id}")]
    FolderDepthExceeded { folder_id: i64, limit: usize },

    /// A folder lookup returned something other than exactly one row.
    #[error("expected exactly one folder row for id {folder_id}, found {rows}")]
    FolderLookup { folder_id: i64, rows: usize },

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExportError {
    /// True for corrupt or unexpectedly shaped folder data.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::FolderDepthExceeded { .. } | Self::FolderLookup { .. })
    }
}
