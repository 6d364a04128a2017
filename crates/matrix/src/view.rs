//! Row-oriented read access shared by every storage variant.

use ndarray::Ix1;

use crate::dia::DiaMatrix;
use crate::sum::compensated_sum;

/// Read-only row access to a matrix of `f64`.
///
/// Every predicate and sampler in the workspace is written once against
/// this trait. Implementors only need [`shape`](MatrixView::shape),
/// [`row_entries`](MatrixView::row_entries) and
/// [`entry`](MatrixView::entry); the rest have defaults.
///
/// Methods taking a row index panic if the index is out of bounds, the
/// same way slice indexing does.
pub trait MatrixView {
    /// Returns `(n_rows, n_cols)`.
    fn shape(&self) -> (usize, usize);

    /// Iterates the stored `(column, value)` pairs of row `i`.
    ///
    /// Dense storage yields every column, zeros included. Sparse storage
    /// yields stored entries only, in storage order; explicitly stored
    /// zeros are yielded as well.
    fn row_entries(&self, i: usize) -> RowEntries<'_>;

    /// Returns the element at `(i, j)`, or `0.0` when it is not stored.
    fn entry(&self, i: usize, j: usize) -> f64;

    /// Compensated sum of row `i`.
    fn row_sum(&self, i: usize) -> f64 {
        compensated_sum(self.row_entries(i).map(|(_, v)| v))
    }

    /// Returns `true` if the matrix has as many rows as columns.
    fn is_square(&self) -> bool {
        let (r, c) = self.shape();
        r == c
    }

    /// Number of rows.
    fn dim(&self) -> usize {
        self.shape().0
    }
}

/// Iterator over the stored entries of one matrix row.
///
/// Yields `(column, value)` pairs. Produced by [`MatrixView::row_entries`].
pub enum RowEntries<'a> {
    /// Every column of a dense row.
    Dense {
        /// Remaining values of the row.
        values: ndarray::iter::Iter<'a, f64, Ix1>,
        /// Column of the next value.
        col: usize,
    },
    /// The stored slice of a compressed-row matrix.
    Compressed {
        /// Remaining column indices.
        cols: std::slice::Iter<'a, usize>,
        /// Remaining values.
        values: std::slice::Iter<'a, f64>,
    },
    /// One candidate position per stored diagonal.
    Banded {
        /// The matrix being read.
        matrix: &'a DiaMatrix,
        /// Row being read.
        row: usize,
        /// Next diagonal to inspect.
        k: usize,
    },
}

impl Iterator for RowEntries<'_> {
    type Item = (usize, f64);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            RowEntries::Dense { values, col } => {
                let v = *values.next()?;
                let j = *col;
                *col += 1;
                Some((j, v))
            }
            RowEntries::Compressed { cols, values } => {
                let j = *cols.next()?;
                let v = *values.next()?;
                Some((j, v))
            }
            RowEntries::Banded { matrix, row, k } => {
                while *k < matrix.offsets().len() {
                    let kk = *k;
                    *k += 1;
                    if let Some(j) = matrix.column_on_diagonal(*row, kk) {
                        return Some((j, matrix.data()[[kk, j]]));
                    }
                }
                None
            }
        }
    }
}
