//! View derivation over the working table
//!
//! Pure functions that turn the working table plus the view settings into
//! the rows to display:
//!
//! ```text
//! working table ──search──▶ filtered indices ──paginate──▶ page slice
//!       ▲
//!       └── sort (persistent reorder, applied when a header is activated)
//! ```

mod pagination;
mod search;
mod sort;

pub use pagination::{clamp_page, page_count, paginate, PageSlice, DEFAULT_PAGE_SIZE};
pub use search::filter_rows;
pub use sort::{compare_cells, sort_rows, SortDirection, SortDirective, SortMode};
