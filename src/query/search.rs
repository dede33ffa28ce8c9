//! Case-insensitive substring search over table rows

use crate::model::{Record, Table};

/// Check if any cell of the record contains the (already lower-cased) needle
fn record_matches(record: &Record, needle: &str) -> bool {
    record
        .cells()
        .any(|cell| cell.to_lowercase().contains(needle))
}

/// Indices of rows matching the search term, in stored order
///
/// An empty term matches every row.
pub fn filter_rows(table: &Table, term: &str) -> Vec<usize> {
    if term.is_empty() {
        return (0..table.row_count()).collect();
    }

    let needle = term.to_lowercase();
    table
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, record)| record_matches(record, &needle))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table::from_rows(
            vec!["Title".to_string(), "Author".to_string()],
            vec![
                vec!["Dune".to_string(), "Frank Herbert".to_string()],
                vec!["Emma".to_string(), "Jane Austen".to_string()],
                vec!["Persuasion".to_string(), "Jane Austen".to_string()],
            ],
        )
    }

    #[test]
    fn test_empty_term_matches_all_in_order() {
        assert_eq!(filter_rows(&table(), ""), vec![0, 1, 2]);
    }

    #[test]
    fn test_case_insensitive_match() {
        assert_eq!(filter_rows(&table(), "AUSTEN"), vec![1, 2]);
        assert_eq!(filter_rows(&table(), "dUnE"), vec![0]);
    }

    #[test]
    fn test_substring_in_any_column() {
        assert_eq!(filter_rows(&table(), "ers"), vec![2]);
        assert_eq!(filter_rows(&table(), "an"), vec![0, 1, 2]);
    }

    #[test]
    fn test_no_match() {
        assert!(filter_rows(&table(), "tolkien").is_empty());
    }

    #[test]
    fn test_non_ascii_lowercase() {
        let table = Table::from_rows(
            vec!["Title".to_string()],
            vec![vec!["ÉTUDE".to_string()], vec!["etude".to_string()]],
        );
        assert_eq!(filter_rows(&table, "étude"), vec![0]);
    }
}
