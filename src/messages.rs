//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::csv::ParsedTable;

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    // === Ingestion ===
    /// Read and parse a CSV file (an empty path means nothing was selected)
    LoadFile(PathBuf),
    /// Result of a file load (from async operation)
    FileLoaded {
        path: PathBuf,
        result: Result<ParsedTable, String>,
    },
    /// Replace the table with random sample data
    GenerateSample {
        rows: Option<usize>,
        seed: Option<u64>,
    },
    /// Replace the table with numbered fixture data
    GenerateFixture { rows: Option<usize> },

    // === Editing ===
    /// Edit a cell addressed by its row on the current page
    EditCell {
        display_row: usize,
        column: String,
        value: String,
    },
    /// Edit a cell addressed by its absolute row in the working table
    EditSourceCell {
        row: usize,
        column: String,
        value: String,
    },
    /// Restore the loaded snapshot and clear search/sort/page
    ResetAll,

    // === View ===
    /// Activate a column header (sort, or toggle direction)
    SortBy(String),
    /// Replace the search term
    SetSearch(String),
    NextPage,
    PrevPage,
    /// Jump to a page (1-based, clamped)
    GoToPage(usize),

    // === Export ===
    /// Export the working table (None = configured file name)
    Export { path: Option<PathBuf> },
    /// Result of an export write (from async operation)
    ExportCompleted {
        path: PathBuf,
        result: Result<usize, String>,
    },

    Quit,
}
