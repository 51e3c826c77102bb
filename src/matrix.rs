//! Dense row-major numeric matrix used for domain tables and query batches.

use crate::error::{Error, Result};

/// An owned, dense, row-major `f64` matrix.
///
/// `Matrix` is the numeric table type for this crate: the enumerated domain
/// of a [`BanditParameter`](crate::BanditParameter) is one, and so are the
/// inputs and outputs of [`round`](crate::BanditParameter::round) and
/// [`sample_uniform`](crate::BanditParameter::sample_uniform). Once handed to
/// a parameter it is never mutated, so shared references are safe to read
/// from any number of threads.
///
/// # Examples
///
/// ```
/// use param_space::Matrix;
///
/// let m = Matrix::from_rows(vec![vec![1.0, 10.0], vec![2.0, 20.0]]).unwrap();
/// assert_eq!(m.nrows(), 2);
/// assert_eq!(m.ncols(), 2);
/// assert_eq!(m.row(1), &[2.0, 20.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix {
    data: Vec<f64>,
    nrows: usize,
    ncols: usize,
}

impl Matrix {
    /// Creates a matrix from a list of equal-length rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RaggedRows`] if any row's length differs from the
    /// first row's.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
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
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            data.extend(row);
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Creates an empty matrix with zero rows and the given column count.
    #[must_use]
    pub fn with_columns(ncols: usize) -> Self {
        Self {
            data: Vec::new(),
            nrows: 0,
            ncols,
        }
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

    /// Returns `true` if the matrix has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nrows == 0
    }

    /// Returns row `index` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.nrows()`.
    #[must_use]
    pub fn row(&self, index: usize) -> &[f64] {
        assert!(index < self.nrows, "row index out of bounds");
        &self.data[index * self.ncols..(index + 1) * self.ncols]
    }

    /// Returns an iterator over the rows, each as a slice.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.nrows).map(|index| self.row(index))
    }

    /// Appends a row. The caller guarantees the width matches.
    pub(crate) fn push_row(&mut self, row: &[f64]) {
        debug_assert_eq!(row.len(), self.ncols);
        self.data.extend_from_slice(row);
        self.nrows += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rectangular() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 2);
        assert_eq!(m.row(0), &[1.0, 2.0]);
        assert_eq!(m.row(2), &[5.0, 6.0]);
    }

    #[test]
    fn from_rows_ragged() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
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
    fn from_rows_empty() {
        let m = Matrix::from_rows(vec![]).unwrap();
        assert!(m.is_empty());
        assert_eq!(m.ncols(), 0);
        assert_eq!(m.rows().count(), 0);
    }

    #[test]
    fn with_columns_is_empty() {
        let m = Matrix::with_columns(3);
        assert!(m.is_empty());
        assert_eq!(m.ncols(), 3);
    }

    #[test]
    fn push_row_appends() {
        let mut m = Matrix::with_columns(2);
        m.push_row(&[1.0, 2.0]);
        m.push_row(&[3.0, 4.0]);
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.row(1), &[3.0, 4.0]);
    }

    #[test]
    fn rows_iterates_in_order() {
        let m = Matrix::from_rows(vec![vec![1.0], vec![2.0], vec![3.0]]).unwrap();
        let collected: Vec<&[f64]> = m.rows().collect();
        assert_eq!(collected, vec![&[1.0][..], &[2.0][..], &[3.0][..]]);
    }

    #[test]
    #[should_panic(expected = "row index out of bounds")]
    fn row_out_of_bounds_panics() {
        let m = Matrix::with_columns(2);
        let _ = m.row(0);
    }
}
