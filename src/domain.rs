//! Core record types and run configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default cap applied to free-text and URL fields in report-card views.
pub const DEFAULT_MAX_FIELD_LEN: usize = 180;

/// Default row cap for the recent/frequent links page.
pub const DEFAULT_RECENT_LINKS_LIMIT: usize = 100;

pub const DEFAULT_GITHUB_PREFIX: &str = "https://github.com/";

pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// One visit to a place, as joined from the visits and places tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitRecord {
    pub url: String,
    pub title: Option<String>,
    pub reversed_host: String,
    pub visit_count: i64,
    pub frecency: i64,
    pub visit_time_micros: i64,
}

impl VisitRecord {
    /// The host name in reading order (`rev_host` is stored reversed).
    pub fn host(&self) -> String {
        self.reversed_host.chars().rev().collect()
    }
}

/// A distinct URL known to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceRecord {
    pub url: String,
    pub title: Option<String>,
    pub frecency: i64,
}

/// A node of the bookmark folder tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderNode {
    pub id: i64,
    pub parent_id: i64,
    pub title: Option<String>,
}

/// A bookmark row before its folder path is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBookmark {
    pub title: Option<String>,
    pub url: String,
    pub parent_id: i64,
}

/// A bookmark with its resolved folder path, e.g. `/Dev/GitHub/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
    pub parent_path: String,
}

impl Bookmark {
    /// Ordering key: folder path first, then title.
    pub fn sort_key(&self) -> String {
        format!("{}{}", self.parent_path, self.title)
    }
}

/// Resolved bookmarks, sorted by `parent_path + title`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkSet {
    pub bookmarks: Vec<Bookmark>,
    /// Rows dropped because they do not point at a web URL.
    pub skipped: usize,
}

impl BookmarkSet {
    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bookmark> {
        self.bookmarks.iter()
    }

    /// Bookmarks whose URL starts with `prefix`, in the established order.
    pub fn with_url_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a Bookmark> {
        self.bookmarks.iter().filter(move |b| b.url.starts_with(prefix))
    }
}

/// Effective configuration for one export run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output_dir: PathBuf,
    pub output_prefix: String,
    pub do_github: bool,
    pub max_field_len: usize,
    pub recent_links_limit: usize,
    pub github_prefix: String,
    pub include_timestamp: bool,
    pub write_report: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            output_prefix: "places".to_string(),
            do_github: false,
            max_field_len: DEFAULT_MAX_FIELD_LEN,
            recent_links_limit: DEFAULT_RECENT_LINKS_LIMIT,
            github_prefix: DEFAULT_GITHUB_PREFIX.to_string(),
            include_timestamp: true,
            write_report: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_is_reversed() {
        let visit = VisitRecord {
            url: "https://www.mozilla.org/".to_string(),
            title: None,
            reversed_host: "gro.allizom.www.".to_string(),
            visit_count: 1,
            frecency: 10,
            visit_time_micros: 0,
        };
        assert_eq!(visit.host(), ".www.mozilla.org");
    }

    #[test]
    fn prefix_filter_keeps_order() {
        let set = BookmarkSet {
            bookmarks: vec![
                Bookmark {
                    title: "a".into(),
                    url: "https://github.com/a".into(),
                    parent_path: "/".into(),
                },
                Bookmark {
                    title: "b".into(),
                    url: "https://example.com/".into(),
                    parent_path: "/".into(),
                },
                Bookmark {
                    title: "c".into(),
                    url: "https://github.com/c".into(),
                    parent_path: "/x/".into(),
                },
            ],
            skipped: 0,
        };
        let titles: Vec<&str> =
            set.with_url_prefix(DEFAULT_GITHUB_PREFIX).map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c"]);
    }
}
