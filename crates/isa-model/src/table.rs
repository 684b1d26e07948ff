//! Raw assay table
//!
//! Thin wrapper over the matrix produced by an external spreadsheet loader.
//! Row 0 of the input is the header; every later row is data. Cells are plain
//! strings and the empty string means blank.

use crate::error::TableError;
use serde::{Deserialize, Serialize};

/// Header row plus data rows of a study-sample or assay table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssayTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl AssayTable {
    /// Create table from an explicit header and data rows
    #[inline]
    #[must_use]
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    /// Create table from a matrix whose first row is the header
    ///
    /// Rows may be shorter or longer than the header; missing cells read as
    /// absent.
    ///
    /// # Errors
    /// Returns [`TableError::MissingHeader`] for an empty matrix.
    pub fn from_rows<I, R, S>(matrix: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rows = matrix
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect::<Vec<String>>());
        let header = rows.next().ok_or(TableError::MissingHeader)?;
        Ok(Self {
            header,
            rows: rows.collect(),
        })
    }

    /// Header row
    #[inline]
    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Data rows (header excluded)
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows
    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of header columns
    #[inline]
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Raw cell text, `None` only when the row or column is out of range
    #[inline]
    #[must_use]
    pub fn raw(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Non-blank cell text
    ///
    /// Returns `None` for out-of-range positions and for empty cells.
    #[inline]
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.raw(row, column).filter(|value| !value.is_empty())
    }

    /// Non-blank values of a column, one per data row that has one
    pub fn column_values(&self, column: usize) -> impl Iterator<Item = &str> + '_ {
        (0..self.rows.len()).filter_map(move |row| self.cell(row, column))
    }

    /// Position of the first header equal to `name`, ignoring ASCII case
    #[must_use]
    pub fn find_column(&self, name: &str) -> Option<usize> {
        self.header
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> AssayTable {
        AssayTable::from_rows(vec![
            vec!["Source Name", "Protocol REF", "Sample Name"],
            vec!["src1", "growth", "s1"],
            vec!["src2", ""],
        ])
        .unwrap()
    }

    #[test]
    fn empty_matrix_has_no_header() {
        let empty: Vec<Vec<String>> = Vec::new();
        assert_eq!(
            AssayTable::from_rows(empty).unwrap_err(),
            TableError::MissingHeader
        );
    }

    #[test]
    fn first_row_becomes_header() {
        let table = table();
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.header()[1], "Protocol REF");
    }

    #[test]
    fn short_rows_and_blanks_read_as_absent() {
        let table = table();
        assert_eq!(table.cell(0, 1), Some("growth"));
        assert_eq!(table.cell(1, 1), None);
        assert_eq!(table.raw(1, 1), Some(""));
        assert_eq!(table.cell(1, 2), None);
        assert_eq!(table.raw(1, 2), None);
        assert_eq!(table.cell(5, 0), None);
    }

    #[test]
    fn column_values_skip_blanks() {
        let table = table();
        let values: Vec<_> = table.column_values(1).collect();
        assert_eq!(values, vec!["growth"]);
    }

    #[test]
    fn find_column_ignores_case() {
        let table = table();
        assert_eq!(table.find_column("sample name"), Some(2));
        assert_eq!(table.find_column("Extract Name"), None);
    }
}
