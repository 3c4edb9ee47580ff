//! Firefox `places.sqlite` reader.

use super::PlacesSource;
use crate::domain::{FolderNode, PlaceRecord, RawBookmark, VisitRecord};
use crate::error::{ExportError, Result};
use rusqlite::{params, Connection, OpenFlags};
use std::path::Path;

const HISTORY_SQL: &str = "
    SELECT
        p.url,
        p.title,
        p.rev_host,
        p.visit_count,
        p.frecency,
        h.visit_date
    FROM moz_historyvisits h
    JOIN moz_places p ON p.id = h.place_id
    ORDER BY h.visit_date DESC
";

const FRECENCY_SQL: &str = "
    SELECT DISTINCT url, title, frecency
    FROM moz_places
    ORDER BY frecency DESC, url
";

const BOOKMARKS_SQL: &str = "
    SELECT a.title, b.url, a.parent
    FROM moz_bookmarks a
    JOIN moz_places b ON b.id = a.fk
    ORDER BY a.id
";

const FOLDER_SQL: &str = "SELECT id, parent, title FROM moz_bookmarks WHERE id = ?1";

/// Read-only connection to a places database. The connection is released
/// when this value is dropped.
#[derive(Debug)]
pub struct SqlitePlaces {
    conn: Connection,
}

impl SqlitePlaces {
    /// Open `path` read-only. A missing file is reported as
    /// [`ExportError::NotFound`] rather than letting SQLite create it.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ExportError::NotFound { path: path.to_path_buf() });
        }
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    /// Wrap an existing connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }
}

impl PlacesSource for SqlitePlaces {
    fn history(&self) -> Result<Vec<VisitRecord>> {
        let mut stmt = self.conn.prepare(HISTORY_SQL)?;
        let rows = stmt.query_map([], |row| {
            Ok(VisitRecord {
                url: row.get(0)?,
                title: row.get(1)?,
                reversed_host: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                visit_count: row.get::<_, Option<i64>>(3)?.unwrap_or(0),
                frecency: row.get::<_, Option<i64>>(4)?.unwrap_or(0),
                visit_time_micros: row.get::<_, Option<i64>>(5)?.unwrap_or(0),
            })
        })?;
        let visits = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        tracing::debug!(rows = visits.len(), "history rows extracted");
        Ok(visits)
    }

    fn places_by_frecency(&self, limit: Option<usize>) -> Result<Vec<PlaceRecord>> {
        let sql = match limit {
            Some(_) => format!("{FRECENCY_SQL} LIMIT ?1"),
            None => FRECENCY_SQL.to_string(),
        };
        let mut stmt = self.conn.prepare(&sql)?;
        let map_row = |row: &rusqlite::Row<'_>| {
            Ok(PlaceRecord {
                url: row.get(0)?,
                title: row.get(1)?,
                frecency: row.get::<_, Option<i64>>(2)?.unwrap_or(0),
            })
        };
        let places = match limit {
            Some(n) => stmt
                .query_map(params![i64::try_from(n).unwrap_or(i64::MAX)], map_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?,
            None => stmt.query_map([], map_row)?.collect::<rusqlite::Result<Vec<_>>>()?,
        };
        tracing::debug!(rows = places.len(), ?limit, "frecency rows extracted");
        Ok(places)
    }

    fn bookmark_rows(&self) -> Result<Vec<RawBookmark>> {
        let mut stmt = self.conn.prepare(BOOKMARKS_SQL)?;
        let rows = stmt.query_map([], |row| {
            Ok(RawBookmark {
                title: row.get(0)?,
                url: row.get(1)?,
                parent_id: row.get::<_, Option<i64>>(2)?.unwrap_or(0),
            })
        })?;
        let bookmarks = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        tracing::debug!(rows = bookmarks.len(), "bookmark rows extracted");
        Ok(bookmarks)
    }

    fn folder_rows(&self, folder_id: i64) -> Result<Vec<FolderNode>> {
        let mut stmt = self.conn.prepare_cached(FOLDER_SQL)?;
        let rows = stmt.query_map(params![folder_id], |row| {
            Ok(FolderNode {
                id: row.get(0)?,
                parent_id: row.get::<_, Option<i64>>(1)?.unwrap_or(0),
                title: row.get(2)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}

/// Minimal Firefox places schema, used by tests and fixtures.
pub const FIXTURE_SCHEMA: &str = "
    CREATE TABLE moz_places (
        id INTEGER PRIMARY KEY,
        url TEXT,
        title TEXT,
        rev_host TEXT,
        visit_count INTEGER DEFAULT 0,
        frecency INTEGER DEFAULT -1
    );
    CREATE TABLE moz_historyvisits (
        id INTEGER PRIMARY KEY,
        place_id INTEGER,
        visit_date INTEGER
    );
    CREATE TABLE moz_bookmarks (
        id INTEGER PRIMARY KEY,
        type INTEGER,
        fk INTEGER DEFAULT NULL,
        parent INTEGER,
        title TEXT
    );
";
