//! Heterogeneous construction-time domain tables.
//!
//! A [`DomainTable`] is what callers hand to
//! [`BanditParameter::new`](crate::BanditParameter::new): an N×D grid of
//! [`CellValue`]s where each column is later reflected into a sub-parameter.
//! Numeric columns become discrete sub-parameters; columns holding any
//! symbolic cell are treated as categorical wholesale.

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// A single cell of a domain table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// A numeric value.
    Number(f64),
    /// A symbolic (non-numeric) value.
    Symbol(String),
}

impl core::fmt::Display for CellValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Symbol(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Symbol(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Symbol(value)
    }
}

/// An N×D grid of cells enumerating the valid joint value-combinations of a
/// restricted domain. Rows are combinations, columns are sub-parameter slots.
///
/// # Examples
///
/// ```
/// use param_space::DomainTable;
///
/// let table = DomainTable::from_numeric_rows(vec![
///     vec![1.0, 10.0],
///     vec![1.0, 20.0],
///     vec![2.0, 10.0],
/// ]).unwrap();
/// assert_eq!(table.nrows(), 3);
/// assert!(table.column_is_numeric(0));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DomainTable {
    cells: Vec<CellValue>,
    nrows: usize,
    ncols: usize,
}

impl DomainTable {
    /// Creates a table from a list of equal-length rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RaggedRows`] if any row's length differs from the
    /// first row's.
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Result<Self> {
        let ncols = rows.first().map_or(0, Vec::len);
        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != ncols {
                return Err(Error::RaggedRows {
                    expected: ncols,
                    got: row.len(),
                    row_index,
                });
            }
        }
        let nrows = rows.len();
        let mut cells = Vec::with_capacity(nrows * ncols);
        for row in rows {
            cells.extend(row);
        }
        Ok(Self {
            cells,
            nrows,
            ncols,
        })
    }

    /// Creates an all-numeric table from a list of equal-length rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RaggedRows`] if any row's length differs from the
    /// first row's.
    pub fn from_numeric_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(CellValue::Number).collect())
                .collect(),
        )
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Returns the cell at (`row`, `column`).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> &CellValue {
        assert!(row < self.nrows && column < self.ncols, "cell out of bounds");
        &self.cells[row * self.ncols + column]
    }

    /// Returns an iterator over the cells of column `column`, top to bottom.
    pub fn column(&self, column: usize) -> impl Iterator<Item = &CellValue> {
        (0..self.nrows).map(move |row| self.cell(row, column))
    }

    /// Returns `true` if every cell of column `column` is numeric.
    #[must_use]
    pub fn column_is_numeric(&self, column: usize) -> bool {
        self.column(column)
            .all(|cell| matches!(cell, CellValue::Number(_)))
    }

    /// Extracts column `column` as numbers, or `None` if any cell is symbolic.
    #[must_use]
    pub fn numeric_column(&self, column: usize) -> Option<Vec<f64>> {
        self.column(column)
            .map(|cell| match cell {
                CellValue::Number(v) => Some(*v),
                CellValue::Symbol(_) => None,
            })
            .collect()
    }

    /// Returns the sorted distinct levels of column `column` as strings.
    ///
    /// Numeric cells are stringified, so a column mixing numbers and symbols
    /// degrades to symbolic levels as a whole.
    #[must_use]
    pub fn column_levels(&self, column: usize) -> Vec<String> {
        let mut levels: Vec<String> = self.column(column).map(ToString::to_string).collect();
        levels.sort();
        levels.dedup();
        levels
    }

    /// Converts the table to a numeric matrix, or `None` if any cell is
    /// symbolic.
    #[must_use]
    pub fn to_matrix(&self) -> Option<Matrix> {
        let rows: Option<Vec<Vec<f64>>> = (0..self.nrows)
            .map(|row| {
                (0..self.ncols)
                    .map(|column| match self.cell(row, column) {
                        CellValue::Number(v) => Some(*v),
                        CellValue::Symbol(_) => None,
                    })
                    .collect()
            })
            .collect();
        // Row widths were validated at construction, so from_rows cannot fail.
        rows.and_then(|rows| Matrix::from_rows(rows).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_table() -> DomainTable {
        DomainTable::from_rows(vec![
            vec![CellValue::from(1.0), CellValue::from("relu")],
            vec![CellValue::from(2.0), CellValue::from("tanh")],
            vec![CellValue::from(2.0), CellValue::from("relu")],
        ])
        .unwrap()
    }

    #[test]
    fn from_rows_shape() {
        let table = mixed_table();
        assert_eq!(table.nrows(), 3);
        assert_eq!(table.ncols(), 2);
        assert_eq!(table.cell(1, 0), &CellValue::Number(2.0));
        assert_eq!(table.cell(1, 1), &CellValue::Symbol("tanh".to_owned()));
    }

    #[test]
    fn from_rows_ragged() {
        let err = DomainTable::from_rows(vec![
            vec![CellValue::from(1.0), CellValue::from(2.0)],
            vec![CellValue::from(3.0)],
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            Error::RaggedRows {
                expected: 2,
                got: 1,
                row_index: 1
            }
        ));
    }

    #[test]
    fn column_is_numeric_per_column() {
        let table = mixed_table();
        assert!(table.column_is_numeric(0));
        assert!(!table.column_is_numeric(1));
    }

    #[test]
    fn numeric_column_extraction() {
        let table = mixed_table();
        assert_eq!(table.numeric_column(0), Some(vec![1.0, 2.0, 2.0]));
        assert_eq!(table.numeric_column(1), None);
    }

    #[test]
    fn column_levels_sorted_distinct() {
        let table = mixed_table();
        assert_eq!(table.column_levels(1), vec!["relu", "tanh"]);
    }

    #[test]
    fn column_levels_stringify_numbers() {
        let table = DomainTable::from_rows(vec![
            vec![CellValue::from(1.0)],
            vec![CellValue::from("a")],
        ])
        .unwrap();
        assert_eq!(table.column_levels(0), vec!["1", "a"]);
    }

    #[test]
    fn to_matrix_all_numeric() {
        let table = DomainTable::from_numeric_rows(vec![vec![1.0, 10.0], vec![2.0, 20.0]]).unwrap();
        let matrix = table.to_matrix().unwrap();
        assert_eq!(matrix.row(0), &[1.0, 10.0]);
        assert_eq!(matrix.row(1), &[2.0, 20.0]);
    }

    #[test]
    fn to_matrix_rejects_symbols() {
        assert!(mixed_table().to_matrix().is_none());
    }

    #[test]
    fn cell_value_display() {
        assert_eq!(CellValue::from(1.5).to_string(), "1.5");
        assert_eq!(CellValue::from("adam").to_string(), "adam");
    }
}
