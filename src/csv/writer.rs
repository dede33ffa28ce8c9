//! CSV export of the working table

use crate::model::Table;

/// File name offered for the exported table
pub const EXPORT_FILE_NAME: &str = "edited_books.csv";

/// MIME type of the exported bytes
pub const EXPORT_MIME_TYPE: &str = "text/csv;charset=utf-8";

/// Error type for CSV export
#[derive(Debug, Clone)]
pub struct ExportError {
    pub message: String,
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CSV export error: {}", self.message)
    }
}

impl std::error::Error for ExportError {}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError {
            message: err.to_string(),
        }
    }
}

/// Serialize the whole table, in stored order, to CSV bytes.
///
/// Fields are quoted only when needed and records end with CRLF. A table
/// without columns produces no output at all.
pub fn export_csv(table: &Table) -> Result<Vec<u8>, ExportError> {
    if table.column_count() == 0 {
        return Ok(Vec::new());
    }

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer.write_record(table.columns())?;
    for record in table.rows() {
        writer.write_record(record.cells())?;
    }

    writer.into_inner().map_err(|e| ExportError {
        message: e.to_string(),
    })
}
