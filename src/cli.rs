//! Command-line argument parsing
//!
//! Supports:
//! - Opening a CSV file at startup
//! - Starting with random sample data or the numbered fixture
//! - Overriding page size and the export destination

use clap::Parser;
use std::path::PathBuf;

use crate::csv::Delimiter;
use crate::messages::Msg;

/// An in-memory CSV editor for book catalogs
#[derive(Parser, Debug)]
#[command(name = "bookcsv", version, about = "An in-memory CSV editor for book catalogs")]
pub struct CliArgs {
    /// CSV file to open
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Start with random sample data
    #[arg(short = 'g', long, conflicts_with_all = ["path", "fixture"])]
    pub generate: bool,

    /// Start with numbered fixture data
    #[arg(long, conflicts_with = "path")]
    pub fixture: bool,

    /// Number of rows to generate
    #[arg(long, value_name = "N")]
    pub rows: Option<usize>,

    /// Seed for reproducible sample data
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Rows per page
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Where `export` writes when no path is given
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Field delimiter for loaded files (detected when omitted)
    #[arg(short, long, value_enum, value_name = "DELIMITER")]
    pub delimiter: Option<Delimiter>,

    /// Log info-level messages to the console
    #[arg(short, long)]
    pub verbose: bool,
}

/// What the session starts with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupSource {
    /// Start with an empty table
    Empty,
    /// Load a CSV file
    File(PathBuf),
    /// Random sample data
    Generate {
        rows: Option<usize>,
        seed: Option<u64>,
    },
    /// Numbered fixture data
    Fixture { rows: Option<usize> },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub source: StartupSource,
    /// Page size override (already validated to be non-zero)
    pub page_size: Option<usize>,
    /// Export destination override
    pub output: Option<PathBuf>,
    /// Delimiter override for file loads
    pub delimiter: Option<Delimiter>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if self.page_size == Some(0) {
            return Err("--page-size must be at least 1".to_string());
        }
        if self.seed.is_some() && !self.generate {
            return Err("--seed only applies to --generate".to_string());
        }

        let source = if self.generate {
            StartupSource::Generate {
                rows: self.rows,
                seed: self.seed,
            }
        } else if self.fixture {
            StartupSource::Fixture { rows: self.rows }
        } else if let Some(path) = self.path {
            if path.is_dir() {
                return Err(format!("{} is a directory", path.display()));
            }
            StartupSource::File(path)
        } else {
            StartupSource::Empty
        };

        Ok(StartupConfig {
            source,
            page_size: self.page_size,
            output: self.output,
            delimiter: self.delimiter,
        })
    }
}

impl StartupConfig {
    /// Message that performs the initial ingestion, if any
    pub fn initial_msg(&self) -> Option<Msg> {
        match &self.source {
            StartupSource::Empty => None,
            StartupSource::File(path) => Some(Msg::LoadFile(path.clone())),
            StartupSource::Generate { rows, seed } => Some(Msg::GenerateSample {
                rows: *rows,
                seed: *seed,
            }),
            StartupSource::Fixture { rows } => Some(Msg::GenerateFixture { rows: *rows }),
        }
    }
}
