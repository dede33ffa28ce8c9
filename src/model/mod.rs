//! Application model
//!
//! `AppModel` is the single source of truth: the table state plus the view
//! settings (search term, sort directive, page). Rows to display are derived
//! from it on demand and never stored.

mod table;

use std::path::PathBuf;

pub use table::{EditError, Record, Table, TableState};

use crate::config::AppConfig;
use crate::csv::IngestReport;
use crate::query::{clamp_page, filter_rows, page_count, paginate, SortDirective};

/// Where the current table came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Parsed from a CSV file
    File(PathBuf),
    /// Random sample data
    Sample { rows: usize, seed: Option<u64> },
    /// Numbered fixture data
    Fixture { rows: usize },
}

/// Ingestion lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Nothing loaded yet
    #[default]
    Empty,
    /// A file is being read; the table is not rendered
    Loading { path: PathBuf },
    /// A table is loaded
    Ready,
}

/// One visible row and where it lives in the working table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRow<'a> {
    /// Absolute index into the working table
    pub source_index: usize,
    pub record: &'a Record,
}

/// Everything needed to draw the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    pub columns: &'a [String],
    pub rows: Vec<PageRow<'a>>,
    pub sort: Option<&'a SortDirective>,
    /// Current page (1-based)
    pub page: usize,
    pub page_count: usize,
    /// Offset of the first visible row within the filtered rows
    pub start_index: usize,
    /// Rows matching the search term
    pub total: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// The complete application state
#[derive(Debug, Clone, Default)]
pub struct AppModel {
    /// Working table and its snapshot
    pub table: TableState,
    /// Current search term
    pub search: String,
    /// Last activated sort, if any
    pub sort: Option<SortDirective>,
    /// Current page (1-based, kept in range by `clamp_page`)
    pub page: usize,
    pub status: LoadStatus,
    pub source: Option<DataSource>,
    /// Report from the last file ingestion
    pub report: IngestReport,
    /// Transient feedback for the user (errors, export results)
    pub status_message: Option<String>,
    pub config: AppConfig,
}

impl AppModel {
    /// Create an empty model
    pub fn new(config: AppConfig) -> Self {
        Self {
            page: 1,
            config,
            ..Default::default()
        }
    }

    /// Rows per page
    pub fn page_size(&self) -> usize {
        self.config.page_size.max(1)
    }

    /// Check if a file is being loaded
    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading { .. })
    }

    /// Indices of working rows matching the search term
    pub fn filtered_indices(&self) -> Vec<usize> {
        filter_rows(&self.table.working, &self.search)
    }

    /// Number of pages for the current filter
    pub fn page_count(&self) -> usize {
        page_count(self.filtered_indices().len(), self.page_size())
    }

    /// Pull the page back into range after the filtered rows changed
    pub fn clamp_page(&mut self) {
        let total = self.filtered_indices().len();
        self.page = clamp_page(self.page, total, self.page_size());
    }

    /// Map a row on the current page to its absolute working index
    pub fn source_index(&self, display_row: usize) -> Option<usize> {
        let indices = self.filtered_indices();
        let slice = paginate(&indices, self.page, self.page_size());
        slice.rows.get(display_row).copied()
    }

    /// Install a freshly ingested table and clear the view settings
    pub fn ingest(&mut self, table: Table, source: DataSource, report: IngestReport) {
        self.table.replace(table);
        self.source = Some(source);
        self.report = report;
        self.status = LoadStatus::Ready;
        self.clear_view();
    }

    /// Clear search, sort and page
    pub fn clear_view(&mut self) {
        self.search.clear();
        self.sort = None;
        self.page = 1;
    }

    /// Status to fall back to when a load fails
    pub fn settled_status(&self) -> LoadStatus {
        if self.source.is_some() {
            LoadStatus::Ready
        } else {
            LoadStatus::Empty
        }
    }

    /// Derive the rows visible on the current page
    pub fn current_page(&self) -> PageView<'_> {
        let working = &self.table.working;
        let indices = self.filtered_indices();
        let slice = paginate(&indices, self.page, self.page_size());

        let rows = slice
            .rows
            .iter()
            .filter_map(|&idx| {
                working.row(idx).map(|record| PageRow {
                    source_index: idx,
                    record,
                })
            })
            .collect();

        PageView {
            columns: working.columns(),
            rows,
            sort: self.sort.as_ref(),
            page: slice.page,
            page_count: slice.page_count(),
            start_index: slice.start_index,
            total: slice.total,
            has_prev: slice.has_prev(),
            has_next: slice.has_next(),
        }
    }
}
