//! Report view pipeline.
//!
//! Each [`ReportView`] turns extracted rows into one rendered artifact:
//! extract, sanitize, render, then hand the text to an [`OutputSink`].
//! Bookmark-based views share the resolver's single cached bookmark set.

use crate::domain::{Config, VisitRecord};
use crate::error::Result;
use crate::extract::PlacesSource;
use crate::render::csv::{BOOKMARK_COLUMNS, FRECENCY_COLUMNS, HISTORY_COLUMNS};
use crate::render::{render_csv, render_page, render_report, LinkItem};
use crate::resolve::BookmarkResolver;
use crate::sink::OutputSink;
use crate::utils::{format_visit_time, generated_at, truncate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportView {
    HistoryCsv,
    BookmarksCsv,
    BookmarksHtml,
    FrecencyCsv,
    RecentLinksHtml,
    GithubLinksHtml,
}

impl ReportView {
    /// Run order. The GitHub view is last and optional.
    pub const ALL: [ReportView; 6] = [
        ReportView::HistoryCsv,
        ReportView::BookmarksCsv,
        ReportView::BookmarksHtml,
        ReportView::FrecencyCsv,
        ReportView::RecentLinksHtml,
        ReportView::GithubLinksHtml,
    ];

    /// Views enabled for a run.
    pub fn selected(do_github: bool) -> Vec<ReportView> {
        Self::ALL
            .into_iter()
            .filter(|view| do_github || *view != ReportView::GithubLinksHtml)
            .collect()
    }

    pub fn name(self) -> &'static str {
        match self {
            ReportView::HistoryCsv => "history-csv",
            ReportView::BookmarksCsv => "bookmarks-csv",
            ReportView::BookmarksHtml => "bookmarks-html",
            ReportView::FrecencyCsv => "frecency-csv",
            ReportView::RecentLinksHtml => "recent-links-html",
            ReportView::GithubLinksHtml => "github-links-html",
        }
    }

    fn file_suffix(self) -> &'static str {
        match self {
            ReportView::HistoryCsv => "history.csv",
            ReportView::BookmarksCsv => "bookmarks.csv",
            ReportView::BookmarksHtml => "bookmarks.html",
            ReportView::FrecencyCsv => "frecency.csv",
            ReportView::RecentLinksHtml => "recent-links.html",
            ReportView::GithubLinksHtml => "github-links.html",
        }
    }

    pub fn file_name(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.file_suffix())
    }
}

/// Rendered text for one view and the number of data rows in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    pub text: String,
    pub rows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOutput {
    pub view: ReportView,
    pub file_name: String,
    pub rows: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub outputs: Vec<ViewOutput>,
    pub bookmarks_skipped: usize,
}

/// Drives the views of one run over a single source.
pub struct ReportPipeline<S> {
    resolver: BookmarkResolver<S>,
    output_prefix: String,
    max_field_len: usize,
    recent_links_limit: usize,
    github_prefix: String,
    generated_at: Option<String>,
    write_report: bool,
}

impl<S: PlacesSource> ReportPipeline<S> {
    pub fn new(source: S, config: &Config) -> Self {
        Self {
            resolver: BookmarkResolver::new(source),
            output_prefix: config.output_prefix.clone(),
            max_field_len: config.max_field_len,
            recent_links_limit: config.recent_links_limit,
            github_prefix: config.github_prefix.clone(),
            generated_at: config.include_timestamp.then(generated_at),
            write_report: config.write_report,
        }
    }

    /// Override the footer timestamp (`None` omits it).
    pub fn generated_at(mut self, generated_at: Option<String>) -> Self {
        self.generated_at = generated_at;
        self
    }

    pub fn resolver(&self) -> &BookmarkResolver<S> {
        &self.resolver
    }

    /// Render every view in `views` and write it to `sink`.
    pub fn run(&mut self, views: &[ReportView], sink: &mut dyn OutputSink) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        for &view in views {
            let rendered = self.render(view)?;
            let file_name = view.file_name(&self.output_prefix);
            sink.write(&file_name, &rendered.text)?;
            tracing::debug!(view = view.name(), rows = rendered.rows, "view rendered");
            summary.outputs.push(ViewOutput { view, file_name, rows: rendered.rows });
        }
        if views.iter().any(|v| is_bookmark_view(*v)) {
            summary.bookmarks_skipped = self.resolver.resolve_all()?.skipped;
        }
        if self.write_report {
            let text = render_report(&summary, self.generated_at.as_deref())?;
            sink.write(&format!("{}-report.json", self.output_prefix), &text)?;
        }
        Ok(summary)
    }

    pub fn render(&mut self, view: ReportView) -> Result<RenderedView> {
        match view {
            ReportView::HistoryCsv => self.history_csv(),
            ReportView::BookmarksCsv => self.bookmarks_csv(),
            ReportView::BookmarksHtml => self.bookmarks_html(),
            ReportView::FrecencyCsv => self.frecency_csv(),
            ReportView::RecentLinksHtml => self.recent_links_html(),
            ReportView::GithubLinksHtml => self.github_links_html(),
        }
    }

    fn history_csv(&mut self) -> Result<RenderedView> {
        let visits = self.resolver.source().history()?;
        let max = self.max_field_len;
        let rows: Vec<[String; 6]> = visits.iter().map(|v| history_fields(v, max)).collect();
        Ok(RenderedView { rows: rows.len(), text: render_csv(HISTORY_COLUMNS, rows) })
    }

    fn bookmarks_csv(&mut self) -> Result<RenderedView> {
        let set = self.resolver.resolve_all()?;
        let rows = set.iter().map(|b| [b.parent_path.as_str(), b.title.as_str(), b.url.as_str()]);
        Ok(RenderedView { rows: set.len(), text: render_csv(BOOKMARK_COLUMNS, rows) })
    }

    fn bookmarks_html(&mut self) -> Result<RenderedView> {
        let max = self.max_field_len;
        let items: Vec<LinkItem> =
            self.resolver.resolve_all()?.iter().map(|b| LinkItem::from_bookmark(b, max)).collect();
        Ok(self.page("Bookmarks", &items))
    }

    fn frecency_csv(&mut self) -> Result<RenderedView> {
        let places = self.resolver.source().places_by_frecency(None)?;
        let max = self.max_field_len;
        let rows: Vec<[String; 3]> = places
            .iter()
            .map(|p| {
                [
                    truncate(&p.url, max),
                    truncate(p.title.as_deref().unwrap_or_default(), max),
                    p.frecency.to_string(),
                ]
            })
            .collect();
        Ok(RenderedView { rows: rows.len(), text: render_csv(FRECENCY_COLUMNS, rows) })
    }

    fn recent_links_html(&mut self) -> Result<RenderedView> {
        let limit = self.recent_links_limit;
        let places = self.resolver.source().places_by_frecency(Some(limit))?;
        let items: Vec<LinkItem> =
            places.iter().map(|p| LinkItem::from_place(p, self.max_field_len)).collect();
        Ok(self.page(&format!("Top {limit} Recent/Frequent Links"), &items))
    }

    fn github_links_html(&mut self) -> Result<RenderedView> {
        let max = self.max_field_len;
        let items: Vec<LinkItem> = self
            .resolver
            .resolve_all()?
            .with_url_prefix(&self.github_prefix)
            .map(|b| LinkItem::from_bookmark(b, max))
            .collect();
        Ok(self.page("Bookmarks/GitHub", &items))
    }

    fn page(&self, title: &str, items: &[LinkItem]) -> RenderedView {
        RenderedView {
            text: render_page(title, items, self.generated_at.as_deref()),
            rows: items.len(),
        }
    }
}

fn is_bookmark_view(view: ReportView) -> bool {
    matches!(
        view,
        ReportView::BookmarksCsv | ReportView::BookmarksHtml | ReportView::GithubLinksHtml
    )
}

fn history_fields(visit: &VisitRecord, max: usize) -> [String; 6] {
    [
        truncate(&visit.url, max),
        truncate(visit.title.as_deref().unwrap_or_default(), max),
        truncate(visit.host(), max),
        visit.visit_count.to_string(),
        visit.frecency.to_string(),
        format_visit_time(visit.visit_time_micros),
    ]
}
