//! Persistent single-column sorting
//!
//! Sorting reorders the working table itself. A later search filters the
//! reordered rows; clearing the search does not restore the previous order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::Table;

/// Sort direction for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header marker shown next to the sorted column
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "⬆",
            SortDirection::Descending => "⬇",
        }
    }
}

/// Active sort: which column and which way
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDirective {
    pub column: String,
    pub direction: SortDirection,
}

impl SortDirective {
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }

    /// Directive produced by activating `column` given the current directive.
    ///
    /// Same column toggles direction, a different column starts ascending.
    pub fn activate(current: Option<&SortDirective>, column: &str) -> Self {
        let direction = match current {
            Some(active) if active.column == column => active.direction.toggled(),
            _ => SortDirection::Ascending,
        };
        Self::new(column, direction)
    }
}

/// How cell values are compared while sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Numbers by value, ranked before text
    #[default]
    Natural,
    /// Plain string ordering ("9" sorts after "10")
    Lexical,
}

fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Compare two cell values under the given mode.
///
/// Natural mode ranks numeric cells before text cells, numbers by value and
/// text by byte order, with ties broken by the raw string. This keeps the
/// ordering total on mixed columns.
pub fn compare_cells(a: &str, b: &str, mode: SortMode) -> Ordering {
    if mode == SortMode::Lexical {
        return a.cmp(b);
    }

    match (parse_number(a), parse_number(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Reorder the table's rows by the directive's column.
///
/// Returns false (and leaves the table untouched) if the column is unknown.
/// The sort is stable, so equal keys keep their relative order.
pub fn sort_rows(table: &mut Table, directive: &SortDirective, mode: SortMode) -> bool {
    let Some(col) = table.column_index(&directive.column) else {
        return false;
    };

    table.rows_mut().sort_by(|a, b| {
        let ord = compare_cells(a.cell(col).unwrap_or(""), b.cell(col).unwrap_or(""), mode);
        match directive.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    true
}
