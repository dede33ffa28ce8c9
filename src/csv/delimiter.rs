//! Field delimiter selection

use serde::{Deserialize, Serialize};

/// Lines inspected when sniffing the delimiter
const SNIFF_LINES: usize = 5;

/// Supported CSV delimiters
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

impl Delimiter {
    /// Get the character for this delimiter
    pub fn char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
            Delimiter::Semicolon => ';',
        }
    }

    /// Byte form used by the csv reader/writer
    pub fn byte(self) -> u8 {
        self.char() as u8
    }

    /// Detect delimiter from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "tsv" => Delimiter::Tab,
            "psv" => Delimiter::Pipe,
            _ => Delimiter::Comma,
        }
    }
}

/// Guess the delimiter from the most frequent candidate in the first lines.
///
/// Comma wins ties (and inputs with no candidate at all), then tab, pipe,
/// semicolon.
pub fn detect_delimiter(content: &str) -> Delimiter {
    let sample: Vec<&str> = content.lines().take(SNIFF_LINES).collect();
    let occurrences = |d: Delimiter| -> usize {
        sample.iter().map(|line| line.matches(d.char()).count()).sum()
    };

    let mut best = (Delimiter::Comma, occurrences(Delimiter::Comma));
    for candidate in [Delimiter::Tab, Delimiter::Pipe, Delimiter::Semicolon] {
        let n = occurrences(candidate);
        if n > best.1 {
            best = (candidate, n);
        }
    }
    best.0
}
