//! Application configuration
//!
//! Read from `~/.config/bookcsv/config.yaml`. Every key is optional; missing
//! or unreadable files fall back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::csv::{Delimiter, EXPORT_FILE_NAME};
use crate::query::{SortMode, DEFAULT_PAGE_SIZE};
use crate::sample::{DEFAULT_FIXTURE_ROWS, DEFAULT_SAMPLE_ROWS};

/// Settings for the table engine and shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Rows per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Rows produced by `generate`
    #[serde(default = "default_sample_rows")]
    pub sample_rows: usize,
    /// Rows produced by `fixture`
    #[serde(default = "default_fixture_rows")]
    pub fixture_rows: usize,
    /// File name used when exporting without an explicit path
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
    /// Cell comparison used by sorting
    #[serde(default)]
    pub sort_mode: SortMode,
    /// Delimiter forced on every load; detected per file when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<Delimiter>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_sample_rows() -> usize {
    DEFAULT_SAMPLE_ROWS
}

fn default_fixture_rows() -> usize {
    DEFAULT_FIXTURE_ROWS
}

fn default_export_file_name() -> String {
    EXPORT_FILE_NAME.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            sample_rows: default_sample_rows(),
            fixture_rows: default_fixture_rows(),
            export_file_name: default_export_file_name(),
            sort_mode: SortMode::default(),
            delimiter: None,
        }
    }
}

impl AppConfig {
    /// Load config from the user config directory, or defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, or defaults if it is missing or invalid
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse config from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        Ok(config.normalized())
    }

    /// Page size of zero would make pagination meaningless
    fn normalized(mut self) -> Self {
        self.page_size = self.page_size.max(1);
        self
    }
}
