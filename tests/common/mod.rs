//! Shared fixture for integration tests.

#![allow(dead_code)]

use places_export::extract::sqlite::FIXTURE_SCHEMA;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Visit time of the single history row: 2020-09-13 12:26:40 UTC.
pub const VISIT_MICROS: i64 = 1_600_000_000_000_000;

/// Build a small places database at `dir/places.sqlite`.
///
/// Folders: root(1, untitled) > menu(2) > Dev(3) > GitHub(4).
/// Bookmarks: a github.com link under GitHub, a docs link under Dev, and a
/// `place:` query under menu.
pub fn write_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("places.sqlite");
    let conn = Connection::open(&path).expect("create fixture db");
    conn.execute_batch(FIXTURE_SCHEMA).expect("fixture schema");
    conn.execute_batch(
        "
        INSERT INTO moz_places(id, url, title, rev_host, visit_count, frecency) VALUES
            (1, 'https://www.mozilla.org/en-US/', 'Mozilla & \"Friends\" <3', 'gro.allizom.www.', 1, 150),
            (2, 'https://github.com/rust-lang/rust', 'rust-lang/rust', 'moc.buhtig.', 0, 2000),
            (3, 'https://docs.example.com/page?a=1&b=2', 'Docs', 'moc.elpmaxe.scod.', 0, 90),
            (4, 'place:sort=8&maxResults=10', NULL, NULL, 0, 0);
        INSERT INTO moz_historyvisits(place_id, visit_date) VALUES (1, 1600000000000000);
        INSERT INTO moz_bookmarks(id, type, fk, parent, title) VALUES
            (1, 2, NULL, 0, ''),
            (2, 2, NULL, 1, 'menu'),
            (3, 2, NULL, 2, 'Dev'),
            (4, 2, NULL, 3, 'GitHub'),
            (10, 1, 2, 4, 'Rust'),
            (11, 1, 3, 3, 'Docs'),
            (12, 1, 4, 2, 'Recent Tags');
        ",
    )
    .expect("fixture rows");
    path
}

/// A database whose folders point at each other.
pub fn write_cyclic_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("cyclic.sqlite");
    let conn = Connection::open(&path).expect("create fixture db");
    conn.execute_batch(FIXTURE_SCHEMA).expect("fixture schema");
    conn.execute_batch(
        "
        INSERT INTO moz_places(id, url, title, rev_host, visit_count, frecency) VALUES
            (1, 'https://loop.example/', 'Loop', 'elpmaxe.pool.', 0, 1);
        INSERT INTO moz_bookmarks(id, type, fk, parent, title) VALUES
            (5, 2, NULL, 6, 'a'),
            (6, 2, NULL, 5, 'b'),
            (7, 1, 1, 5, 'Loop');
        ",
    )
    .expect("fixture rows");
    path
}

pub fn local_seconds(micros: i64) -> String {
    use chrono::TimeZone;
    chrono::Local
        .timestamp_opt(micros / 1_000_000, 0)
        .single()
        .expect("unambiguous local time")
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
