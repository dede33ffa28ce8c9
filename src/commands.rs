//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! `update` returns `None` when nothing needs to happen.

use std::path::PathBuf;

use crate::csv::Delimiter;

/// Side effects requested by `update`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Re-render the current page
    Redraw,
    /// Read and parse a CSV file asynchronously
    LoadFile {
        path: PathBuf,
        /// Forced delimiter; detected from the file when absent
        delimiter: Option<Delimiter>,
    },
    /// Write bytes to a file asynchronously
    WriteFile { path: PathBuf, content: Vec<u8> },
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw => true,
            // Loading state shows immediately
            Cmd::LoadFile { .. } => true,
            Cmd::WriteFile { .. } | Cmd::Quit => false,
        }
    }

    /// Count worker replies this command will produce
    pub fn pending_replies(&self) -> usize {
        match self {
            Cmd::LoadFile { .. } | Cmd::WriteFile { .. } => 1,
            Cmd::Redraw | Cmd::Quit => 0,
        }
    }
}
