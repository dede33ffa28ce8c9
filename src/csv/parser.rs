//! CSV ingestion using the csv crate
//!
//! RFC 4180 parsing with the first row as header. Each data row becomes one
//! record aligned to the header; values stay text.

use std::path::Path;

use super::delimiter::{detect_delimiter, Delimiter};
use crate::model::Table;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Error type for CSV parsing
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub line: Option<u64>,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "CSV parse error at line {}: {}", line, self.message),
            None => write!(f, "CSV parse error: {}", self.message),
        }
    }
}

impl std::error::Error for ParseError {}

/// Error loading a CSV file from disk
#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Parse(ParseError),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read file: {}", e),
            LoadError::Parse(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<ParseError> for LoadError {
    fn from(err: ParseError) -> Self {
        LoadError::Parse(err)
    }
}

/// A row the parser could not turn into a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: Option<u64>,
    pub reason: String,
}

/// What happened while ingesting a file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Records that made it into the table
    pub rows_read: usize,
    /// Rows dropped because they failed to parse
    pub skipped: Vec<SkippedRow>,
    /// Rows with fewer fields than the header (padded with empty cells)
    pub padded: usize,
    /// Rows with more fields than the header (extra fields dropped)
    pub truncated: usize,
}

impl IngestReport {
    /// True if every row matched the header exactly
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.padded == 0 && self.truncated == 0
    }
}

/// Parsed table plus the ingestion report
#[derive(Debug, Clone, Default)]
pub struct ParsedTable {
    pub table: Table,
    pub report: IngestReport,
}

/// Make header names unique by suffixing repeats with `_1`, `_2`, ...
fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(headers.len());
    for name in headers {
        let mut candidate = name.clone();
        let mut n = 0;
        while seen.contains(&candidate) {
            n += 1;
            candidate = format!("{}_{}", name, n);
        }
        seen.push(candidate);
    }
    seen
}

/// Parse CSV text into a table
pub fn parse_csv(content: &str, delimiter: Delimiter) -> Result<ParsedTable, ParseError> {
    parse_csv_bytes(content.as_bytes(), delimiter)
}

/// Parse raw CSV bytes into a table.
///
/// Blank lines are skipped. Rows the parser rejects (for example invalid
/// UTF-8) are skipped and listed in the report; only an unreadable header
/// fails the whole parse.
pub fn parse_csv_bytes(content: &[u8], delimiter: Delimiter) -> Result<ParsedTable, ParseError> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.byte())
        .has_headers(false)
        .flexible(true)
        .from_reader(content);

    let mut records = reader.records();

    let columns = match records.next() {
        None => return Ok(ParsedTable::default()),
        Some(Ok(header)) => dedupe_headers(header.iter().map(|s| s.to_string()).collect()),
        Some(Err(e)) => {
            return Err(ParseError {
                message: e.to_string(),
                line: e.position().map(|p| p.line()),
            });
        }
    };

    let width = columns.len();
    let mut report = IngestReport::default();
    let mut rows: Vec<Vec<String>> = Vec::new();

    for result in records {
        match result {
            Ok(record) => {
                if record.len() < width {
                    report.padded += 1;
                } else if record.len() > width {
                    report.truncated += 1;
                    tracing::debug!(
                        line = ?record.position().map(|p| p.line()),
                        fields = record.len(),
                        width,
                        "dropping extra fields"
                    );
                }
                rows.push(record.iter().map(|s| s.to_string()).collect());
            }
            Err(e) => {
                let line = e.position().map(|p| p.line());
                tracing::warn!(?line, "skipping malformed CSV row: {}", e);
                report.skipped.push(SkippedRow {
                    line,
                    reason: e.to_string(),
                });
            }
        }
    }

    report.rows_read = rows.len();
    Ok(ParsedTable {
        table: Table::from_rows(columns, rows),
        report,
    })
}

/// Pick the delimiter for a file: extension first, then content sniffing
pub fn delimiter_for_path(path: &Path, content: &[u8]) -> Delimiter {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if !ext.eq_ignore_ascii_case("csv") => Delimiter::from_extension(ext),
        Some(_) => Delimiter::Comma,
        None => detect_delimiter(&String::from_utf8_lossy(content)),
    }
}

/// Read and parse a CSV file.
///
/// `delimiter` overrides detection when given.
pub fn load_csv_file(path: &Path, delimiter: Option<Delimiter>) -> Result<ParsedTable, LoadError> {
    let content = std::fs::read(path)?;
    let delimiter = delimiter.unwrap_or_else(|| delimiter_for_path(path, &content));
    Ok(parse_csv_bytes(&content, delimiter)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_and_rows() {
        let parsed = parse_csv("Title,Year\nDune,1965\nEmma,1815\n", Delimiter::Comma).unwrap();
        let table = parsed.table;

        assert_eq!(table.columns(), &["Title", "Year"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, "Title"), Some("Dune"));
        assert_eq!(table.get(1, "Year"), Some("1815"));
        assert!(parsed.report.is_clean());
    }

    #[test]
    fn test_parse_quoted_fields() {
        let content = "Title,Note\n\"Hello, world\",\"with \"\"quotes\"\"\"\n";
        let table = parse_csv(content, Delimiter::Comma).unwrap().table;

        assert_eq!(table.get(0, "Title"), Some("Hello, world"));
        assert_eq!(table.get(0, "Note"), Some("with \"quotes\""));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let content = "a,b\n\n1,2\n\n\n3,4\n";
        let parsed = parse_csv(content, Delimiter::Comma).unwrap();
        assert_eq!(parsed.table.row_count(), 2);
        assert_eq!(parsed.report.rows_read, 2);
    }

    #[test]
    fn test_ragged_rows_are_aligned_and_reported() {
        let content = "a,b,c\n1,2\n1,2,3,4\n";
        let parsed = parse_csv(content, Delimiter::Comma).unwrap();

        assert_eq!(parsed.table.get(0, "c"), Some(""));
        assert_eq!(parsed.table.row(1).unwrap().len(), 3);
        assert_eq!(parsed.report.padded, 1);
        assert_eq!(parsed.report.truncated, 1);
        assert!(!parsed.report.is_clean());
    }

    #[test]
    fn test_invalid_utf8_row_is_skipped() {
        let mut content = b"a,b\n1,2\n".to_vec();
        content.extend_from_slice(b"\xff\xfe,3\n");
        content.extend_from_slice(b"4,5\n");

        let parsed = parse_csv_bytes(&content, Delimiter::Comma).unwrap();
        assert_eq!(parsed.table.row_count(), 2);
        assert_eq!(parsed.report.skipped.len(), 1);
        assert_eq!(parsed.table.get(1, "a"), Some("4"));
    }

    #[test]
    fn test_numeric_values_stay_text() {
        let table = parse_csv("Year\n007\n", Delimiter::Comma).unwrap().table;
        assert_eq!(table.get(0, "Year"), Some("007"));
    }

    #[test]
    fn test_duplicate_headers_are_renamed() {
        let table = parse_csv("a,a,b,a\n1,2,3,4\n", Delimiter::Comma).unwrap().table;
        assert_eq!(table.columns(), &["a", "a_1", "b", "a_2"]);
        assert_eq!(table.get(0, "a_2"), Some("4"));
    }

    #[test]
    fn test_bom_is_stripped() {
        let table = parse_csv("\u{feff}Title\nDune\n", Delimiter::Comma).unwrap().table;
        assert_eq!(table.columns(), &["Title"]);
    }

    #[test]
    fn test_parse_empty() {
        let parsed = parse_csv("", Delimiter::Comma).unwrap();
        assert!(parsed.table.is_empty());
        assert_eq!(parsed.table.column_count(), 0);
    }

    #[test]
    fn test_header_only() {
        let parsed = parse_csv("Title,Author\n", Delimiter::Comma).unwrap();
        assert_eq!(parsed.table.column_count(), 2);
        assert!(parsed.table.is_empty());
    }

    #[test]
    fn test_parse_tsv() {
        let table = parse_csv("a\tb\n1\t2\n", Delimiter::Tab).unwrap().table;
        assert_eq!(table.get(0, "b"), Some("2"));
    }

    #[test]
    fn test_delimiter_for_path() {
        assert_eq!(
            delimiter_for_path(Path::new("books.tsv"), b"a,b"),
            Delimiter::Tab
        );
        assert_eq!(
            delimiter_for_path(Path::new("books.csv"), b"a;b;c"),
            Delimiter::Comma
        );
        assert_eq!(
            delimiter_for_path(Path::new("books"), b"a;b;c"),
            Delimiter::Semicolon
        );
    }
}
