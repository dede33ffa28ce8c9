//! CSV ingestion and export
//!
//! Reading turns CSV text into a uniform [`Table`](crate::model::Table):
//! the header row names the columns and every data row is aligned to it.
//! Writing serializes the working table back to CSV bytes for download.
//!
//! ```text
//! file bytes ──parse_csv_bytes──▶ ParsedTable { table, report }
//! Table ──export_csv──▶ bytes (edited_books.csv)
//! ```

mod delimiter;
mod parser;
mod writer;

pub use delimiter::{detect_delimiter, Delimiter};
pub use parser::{
    delimiter_for_path, load_csv_file, parse_csv, parse_csv_bytes, IngestReport, LoadError,
    ParseError, ParsedTable, SkippedRow,
};
pub use writer::{export_csv, ExportError, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
