//! Fixed-size pagination over a filtered row sequence
//!
//! Pages are 1-based. Slicing never fails: a page past the end yields an
//! empty slice, and `clamp_page` maps any request into the valid range.

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// One page of a row sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlice<'a> {
    /// Row indices on this page (indices into the working table)
    pub rows: &'a [usize],
    /// Offset of the first row within the filtered sequence
    pub start_index: usize,
    /// Current page (1-based)
    pub page: usize,
    /// Total rows in the filtered sequence
    pub total: usize,
    /// Rows per page
    pub page_size: usize,
}

impl PageSlice<'_> {
    /// Check if a previous page exists
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Check if a next page exists
    pub fn has_next(&self) -> bool {
        self.start_index.saturating_add(self.page_size) < self.total
    }

    /// Number of pages needed to show every row (at least 1)
    pub fn page_count(&self) -> usize {
        page_count(self.total, self.page_size)
    }
}

/// Number of pages for `total` rows, never less than 1
pub fn page_count(total: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total.div_ceil(page_size).max(1)
}

/// Map any requested page into `1..=page_count`
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.clamp(1, page_count(total, page_size))
}

/// Slice `indices` into the requested page.
///
/// `page` 0 is treated as page 1 and `page_size` 0 as 1.
pub fn paginate(indices: &[usize], page: usize, page_size: usize) -> PageSlice<'_> {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let start_index = (page - 1).saturating_mul(page_size);

    let start = start_index.min(indices.len());
    let end = start_index.saturating_add(page_size).min(indices.len());

    PageSlice {
        rows: &indices[start..end],
        start_index,
        page,
        total: indices.len(),
        page_size,
    }
}
