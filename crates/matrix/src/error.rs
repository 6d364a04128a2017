//! Error types for the stochmat-matrix crate.

/// Error type for sparse matrix construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    /// Returned when the row pointer array has the wrong length.
    #[error("row pointer length mismatch: expected {expected}, got {got}")]
    RowPointerLength {
        /// Expected length (`n_rows + 1`).
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Returned when the first row pointer is not zero.
    #[error("row pointer must start at 0, got {start}")]
    RowPointerStart {
        /// The first row pointer.
        start: usize,
    },

    /// Returned when row pointers decrease.
    #[error("row pointers must be non-decreasing (row {row})")]
    RowPointerNotMonotone {
        /// Row whose end pointer is below its start pointer.
        row: usize,
    },

    /// Returned when values, column indices and the last row pointer disagree.
    #[error("entry count mismatch: {values} values, {indices} column indices, row pointer ends at {end}")]
    EntryCountMismatch {
        /// Number of stored values.
        values: usize,
        /// Number of stored column indices.
        indices: usize,
        /// Last row pointer.
        end: usize,
    },

    /// Returned when a column index is not below the column count.
    #[error("column index {col} out of bounds for {n_cols} columns")]
    ColumnOutOfBounds {
        /// The invalid column index.
        col: usize,
        /// Number of columns.
        n_cols: usize,
    },

    /// Returned when the number of stored diagonals differs from the number of offsets.
    #[error("diagonal count mismatch: {diagonals} stored diagonals, {offsets} offsets")]
    DiagonalCountMismatch {
        /// Rows of the band data array.
        diagonals: usize,
        /// Number of offsets.
        offsets: usize,
    },

    /// Returned when the band data width differs from the column count.
    #[error("diagonal length mismatch: expected {expected}, got {got}")]
    DiagonalLengthMismatch {
        /// Number of matrix columns.
        expected: usize,
        /// Columns of the band data array.
        got: usize,
    },

    /// Returned when the same diagonal offset is stored twice.
    #[error("duplicate diagonal offset {offset}")]
    DuplicateOffset {
        /// The repeated offset.
        offset: isize,
    },

    /// Returned when a triplet lies outside the matrix.
    #[error("triplet ({row}, {col}) out of bounds for shape {n_rows}x{n_cols}")]
    TripletIndexOutOfBounds {
        /// Row of the triplet.
        row: usize,
        /// Column of the triplet.
        col: usize,
        /// Number of rows.
        n_rows: usize,
        /// Number of columns.
        n_cols: usize,
    },
}
