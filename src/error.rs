#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when a table or matrix is built from rows of unequal width.
    #[error("ragged rows: expected {expected} columns but row {row_index} has {got}")]
    RaggedRows {
        /// The expected number of columns, taken from the first row.
        expected: usize,
        /// The actual number of columns in the offending row.
        got: usize,
        /// The index of the offending row.
        row_index: usize,
    },

    /// Returned when a domain table has no rows or no columns.
    #[error("domain must have at least one row and one column")]
    EmptyDomain,

    /// Returned when the sub-parameter name list length differs from the
    /// domain column count.
    #[error("sub-parameter name count mismatch: expected {expected} names but got {got}")]
    NameCountMismatch {
        /// The number of domain columns.
        expected: usize,
        /// The number of names supplied.
        got: usize,
    },

    /// Returned when a membership query is a matrix that is not a single column.
    #[error("invalid query shape: expected shape (n,) or (n, 1), got ({nrows}, {ncols})")]
    QueryShape {
        /// The number of rows in the query matrix.
        nrows: usize,
        /// The number of columns in the query matrix.
        ncols: usize,
    },

    /// Returned when a query point's length differs from the domain dimension.
    #[error("point dimension mismatch: expected {expected} values but got {got}")]
    PointDimensionMismatch {
        /// The domain dimension.
        expected: usize,
        /// The length of the supplied point.
        got: usize,
    },

    /// Returned when a matrix passed to `round` has the wrong number of columns.
    #[error("column count mismatch: expected {expected} columns but got {got}")]
    ColumnCountMismatch {
        /// The domain dimension.
        expected: usize,
        /// The number of columns in the supplied matrix.
        got: usize,
    },

    /// Returned when the lower bound is greater than the upper bound.
    #[error("invalid bounds: low ({low}) must be less than or equal to high ({high})")]
    InvalidBounds {
        /// The lower bound value.
        low: f64,
        /// The upper bound value.
        high: f64,
    },

    /// Returned when a discrete parameter is created with no values.
    #[error("discrete parameter requires at least one valid value")]
    EmptyValues,

    /// Returned when a one-hot encoding is created with no categories.
    #[error("one-hot encoding requires at least one category")]
    EmptyCategories,

    /// Returned when a domain column is non-numeric. The column is reflected
    /// into a one-hot categorical descriptor and then rejected, because
    /// categorical sub-parameters are not usable end-to-end yet.
    #[error(
        "categorical sub-parameters are not supported: column {column} is non-numeric ({levels} levels)"
    )]
    UnsupportedCategorical {
        /// The index of the non-numeric column.
        column: usize,
        /// The number of distinct levels found in the column.
        levels: usize,
    },

    /// Returned when an internal invariant is violated.
    #[error("internal error: {0}")]
    Internal(&'static str),
}

pub type Result<T> = core::result::Result<T, Error>;
