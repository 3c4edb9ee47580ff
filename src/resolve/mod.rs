//! Bookmark folder path resolution.
//!
//! Folder rows are fetched on demand and kept in an in-memory map, so each
//! folder id is queried at most once per run. The walk up the parent chain is
//! iterative and bounded by [`MAX_FOLDER_DEPTH`] hops.

use crate::domain::{Bookmark, BookmarkSet, FolderNode};
use crate::error::{ExportError, Result};
use crate::extract::PlacesSource;
use once_cell::unsync::OnceCell;
use std::collections::HashMap;

/// Hop limit for a single parent-chain walk. Anything deeper is treated as a
/// cycle or corrupt data.
pub const MAX_FOLDER_DEPTH: usize = 99;

const WEB_SCHEMES: &[&str] = &["http://", "https://"];

/// Resolves bookmark folder paths and caches the resulting [`BookmarkSet`].
///
/// Built once per run and shared by every bookmark-based view.
pub struct BookmarkResolver<S> {
    tree: FolderTree<S>,
    bookmarks: OnceCell<BookmarkSet>,
}

impl<S: PlacesSource> BookmarkResolver<S> {
    pub fn new(source: S) -> Self {
        Self { tree: FolderTree::new(source), bookmarks: OnceCell::new() }
    }

    pub fn source(&self) -> &S {
        &self.tree.source
    }

    /// Slash-delimited titles of the ancestors of `folder_id`, root excluded,
    /// `folder_id` itself included: `/Dev/GitHub/`. Ids `<= 0` are the root
    /// and resolve to `/`. Untitled folders add no segment.
    pub fn resolve_path(&mut self, folder_id: i64) -> Result<String> {
        self.tree.resolve_path(folder_id)
    }

    /// Resolve every web bookmark, sorted by `parent_path + title`.
    ///
    /// The first call queries and walks the store; later calls return the
    /// cached set.
    pub fn resolve_all(&mut self) -> Result<&BookmarkSet> {
        if self.bookmarks.get().is_some() {
            tracing::debug!("bookmark set served from cache");
        }
        let tree = &mut self.tree;
        self.bookmarks.get_or_try_init(|| tree.build_set())
    }
}

/// Folder rows and resolved paths seen so far in this run. Each cached path
/// keeps the number of hops it took to reach the root.
struct FolderTree<S> {
    source: S,
    folders: HashMap<i64, FolderNode>,
    paths: HashMap<i64, (String, usize)>,
}

impl<S: PlacesSource> FolderTree<S> {
    fn new(source: S) -> Self {
        Self { source, folders: HashMap::new(), paths: HashMap::new() }
    }

    fn resolve_path(&mut self, folder_id: i64) -> Result<String> {
        if let Some((path, _)) = self.paths.get(&folder_id) {
            return Ok(path.clone());
        }

        let mut segments: Vec<String> = Vec::new();
        let mut current = folder_id;
        let mut hops = 0usize;
        let mut cached_tail: Option<String> = None;

        while current > 0 {
            if let Some((path, depth)) = self.paths.get(&current) {
                hops += depth;
                if hops > MAX_FOLDER_DEPTH {
                    return Err(ExportError::FolderDepthExceeded {
                        folder_id,
                        limit: MAX_FOLDER_DEPTH,
                    });
                }
                cached_tail = Some(path.clone());
                break;
            }
            hops += 1;
            if hops > MAX_FOLDER_DEPTH {
                return Err(ExportError::FolderDepthExceeded {
                    folder_id,
                    limit: MAX_FOLDER_DEPTH,
                });
            }
            let node = self.folder(current)?;
            if let Some(title) = node.title.filter(|t| !t.is_empty()) {
                segments.push(title);
            }
            current = node.parent_id;
        }

        let mut path = cached_tail.unwrap_or_else(|| "/".to_string());
        for title in segments.iter().rev() {
            path.push_str(title);
            path.push('/');
        }
        self.paths.insert(folder_id, (path.clone(), hops));
        Ok(path)
    }

    fn build_set(&mut self) -> Result<BookmarkSet> {
        let rows = self.source.bookmark_rows()?;
        let mut bookmarks = Vec::with_capacity(rows.len());
        let mut skipped = 0usize;

        for row in rows {
            if !is_web_url(&row.url) {
                tracing::info!(url = %row.url, "skipping non-http bookmark");
                skipped += 1;
                continue;
            }
            let title = row.title.unwrap_or_else(|| format!("({})", row.url));
            let parent_path = self.resolve_path(row.parent_id)?;
            bookmarks.push(Bookmark { title, url: row.url, parent_path });
        }

        bookmarks.sort_by_cached_key(|b| (b.sort_key(), b.url.clone()));
        bookmarks.dedup();
        tracing::debug!(count = bookmarks.len(), skipped, "bookmarks resolved");
        Ok(BookmarkSet { bookmarks, skipped })
    }

    fn folder(&mut self, folder_id: i64) -> Result<FolderNode> {
        if let Some(node) = self.folders.get(&folder_id) {
            return Ok(node.clone());
        }
        let mut rows = self.source.folder_rows(folder_id)?;
        if rows.len() != 1 {
            return Err(ExportError::FolderLookup { folder_id, rows: rows.len() });
        }
        let node = rows.remove(0);
        self.folders.insert(folder_id, node.clone());
        Ok(node)
    }
}

fn is_web_url(url: &str) -> bool {
    WEB_SCHEMES.iter().any(|scheme| {
        url.get(..scheme.len()).is_some_and(|head| head.eq_ignore_ascii_case(scheme))
    })
}
