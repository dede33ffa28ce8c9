//! Table data model
//!
//! A `Table` is an ordered list of records sharing one column list. The
//! column list is fixed at ingestion time; every record holds exactly one cell
//! per column.

/// A single row of the table, cells aligned to `Table::columns`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    cells: Vec<String>,
}

impl Record {
    /// Create a record from already aligned cells
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Cell at column index, or None when out of range
    pub fn cell(&self, col: usize) -> Option<&str> {
        self.cells.get(col).map(|s| s.as_str())
    }

    /// Iterate over all cells in column order
    pub fn cells(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|s| s.as_str())
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True if the record has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn set(&mut self, col: usize, value: String) -> bool {
        match self.cells.get_mut(col) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }
}

/// Ordered sequence of records with a uniform column list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl Table {
    /// Create empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table, aligning every row to the column count.
    ///
    /// Short rows are padded with empty cells and long rows are truncated.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut cells| {
                cells.resize(width, String::new());
                Record::new(cells)
            })
            .collect();
        Self { columns, rows }
    }

    /// Column names in display order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Index of the named column
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Number of records
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// True if the table has no records
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Record at absolute index
    pub fn row(&self, row: usize) -> Option<&Record> {
        self.rows.get(row)
    }

    /// All records in stored order
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Mutable access to the stored order, used by sorting
    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Record> {
        &mut self.rows
    }

    /// Cell value by row index and column name
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column)?;
        self.rows.get(row)?.cell(col)
    }

    /// Set a cell by row index and column name
    pub fn set(&mut self, row: usize, column: &str, value: &str) -> Result<(), EditError> {
        let len = self.rows.len();
        let col = self
            .column_index(column)
            .ok_or_else(|| EditError::UnknownColumn {
                column: column.to_string(),
            })?;
        let record = self
            .rows
            .get_mut(row)
            .ok_or(EditError::RowOutOfBounds { row, len })?;

        if record.set(col, value.to_string()) {
            Ok(())
        } else {
            Err(EditError::UnknownColumn {
                column: column.to_string(),
            })
        }
    }
}

/// Reasons an edit could not be applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    /// Row index past the end of the table
    RowOutOfBounds { row: usize, len: usize },
    /// Column name not present in the table
    UnknownColumn { column: String },
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RowOutOfBounds { row, len } => {
                write!(f, "row {} out of bounds for table with {} rows", row, len)
            }
            Self::UnknownColumn { column } => write!(f, "unknown column '{}'", column),
        }
    }
}

impl std::error::Error for EditError {}

/// Working copy plus the snapshot taken at the last ingestion
#[derive(Debug, Clone, Default)]
pub struct TableState {
    /// Table reflecting edits and sorts
    pub working: Table,
    /// Snapshot captured at load/generate time
    original: Table,
}

impl TableState {
    /// Create state from a freshly ingested table
    pub fn new(table: Table) -> Self {
        Self {
            original: table.clone(),
            working: table,
        }
    }

    /// Replace both working and original with a new table
    pub fn replace(&mut self, table: Table) {
        self.original = table.clone();
        self.working = table;
    }

    /// Snapshot captured at the last ingestion
    pub fn original(&self) -> &Table {
        &self.original
    }

    /// Set one cell of the working table by absolute row index
    pub fn edit(&mut self, row: usize, column: &str, value: &str) -> Result<(), EditError> {
        self.working.set(row, column, value)
    }

    /// Restore the working table from the snapshot
    pub fn reset(&mut self) {
        self.working = self.original.clone();
    }

    /// Check if the working table differs from the snapshot
    pub fn is_modified(&self) -> bool {
        self.working != self.original
    }
}
