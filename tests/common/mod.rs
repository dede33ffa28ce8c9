//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use bookcsv::config::AppConfig;
use bookcsv::csv::IngestReport;
use bookcsv::model::{AppModel, DataSource, Table};
use bookcsv::update::update;
use bookcsv::Msg;

/// Build a table from string literals; the first row is the header
pub fn table(rows: &[&[&str]]) -> Table {
    let mut rows = rows
        .iter()
        .map(|r| r.iter().map(|c| c.to_string()).collect::<Vec<_>>());
    let columns = rows.next().unwrap_or_default();
    Table::from_rows(columns, rows.collect())
}

/// Create a model holding `table` with default configuration
pub fn test_model(table: Table) -> AppModel {
    let mut model = AppModel::new(AppConfig::default());
    let rows = table.row_count();
    model.ingest(table, DataSource::Fixture { rows }, IngestReport::default());
    model
}

/// The three-book catalog used by the acceptance scenarios
pub fn three_books() -> AppModel {
    test_model(table(&[
        &["Title", "Author"],
        &["B", "X"],
        &["A", "Y"],
        &["C", "Z"],
    ]))
}

/// Send a sequence of messages through `update`
pub fn apply(model: &mut AppModel, msgs: impl IntoIterator<Item = Msg>) {
    for msg in msgs {
        update(model, msg);
    }
}

/// Values of `column` on the current page, top to bottom
pub fn visible(model: &AppModel, column: &str) -> Vec<String> {
    let view = model.current_page();
    let Some(col) = view.columns.iter().position(|c| c == column) else {
        return Vec::new();
    };
    view.rows
        .iter()
        .map(|row| row.record.cell(col).unwrap_or("").to_string())
        .collect()
}

/// Values of `column` in the working table, in stored order
pub fn working_column(model: &AppModel, column: &str) -> Vec<String> {
    let working = &model.table.working;
    (0..working.row_count())
        .map(|r| working.get(r, column).unwrap_or("").to_string())
        .collect()
}
