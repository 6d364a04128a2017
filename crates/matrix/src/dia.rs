//! Diagonal-banded sparse storage.

use ndarray::Array2;

use crate::error::MatrixError;
use crate::view::{MatrixView, RowEntries};

/// A sparse matrix stored as a stack of diagonals.
///
/// `data` has one row per stored diagonal and one column per matrix
/// column. `data[[k, j]]` holds the element at `(j - offsets[k], j)`, so
/// offset 0 is the main diagonal, positive offsets lie above it and
/// negative offsets below. Positions of `data` that map outside the matrix
/// are padding and are never read.
#[derive(Debug, Clone, PartialEq)]
pub struct DiaMatrix {
    n_rows: usize,
    n_cols: usize,
    data: Array2<f64>,
    offsets: Vec<isize>,
}

impl DiaMatrix {
    /// Builds a banded matrix from stacked diagonals and their offsets.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError`] if `data` does not have one row per offset
    /// and `n_cols` columns, or if an offset repeats.
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        data: Array2<f64>,
        offsets: Vec<isize>,
    ) -> Result<Self, MatrixError> {
        if data.nrows() != offsets.len() {
            return Err(MatrixError::DiagonalCountMismatch {
                diagonals: data.nrows(),
                offsets: offsets.len(),
            });
        }
        if data.ncols() != n_cols {
            return Err(MatrixError::DiagonalLengthMismatch {
                expected: n_cols,
                got: data.ncols(),
            });
        }
        for (k, &offset) in offsets.iter().enumerate() {
            if offsets[..k].contains(&offset) {
                return Err(MatrixError::DuplicateOffset { offset });
            }
        }
        Ok(Self {
            n_rows,
            n_cols,
            data,
            offsets,
        })
    }

    /// The stacked diagonals.
    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    /// Offset of each stored diagonal.
    pub fn offsets(&self) -> &[isize] {
        &self.offsets
    }

    /// Column where diagonal `k` crosses row `i`, if inside the matrix.
    pub(crate) fn column_on_diagonal(&self, i: usize, k: usize) -> Option<usize> {
        let j = i as isize + self.offsets[k];
        (0..self.n_cols as isize)
            .contains(&j)
            .then_some(j as usize)
    }

    /// Expands into a dense array. Intended for small matrices and tests.
    pub fn to_dense(&self) -> Array2<f64> {
        let mut out = Array2::zeros((self.n_rows, self.n_cols));
        for i in 0..self.n_rows {
            for (j, v) in self.row_entries(i) {
                out[[i, j]] = v;
            }
        }
        out
    }
}

impl MatrixView for DiaMatrix {
    fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    fn row_entries(&self, i: usize) -> RowEntries<'_> {
        assert!(
            i < self.n_rows,
            "row {i} out of bounds for {} rows",
            self.n_rows
        );
        RowEntries::Banded {
            matrix: self,
            row: i,
            k: 0,
        }
    }

    fn entry(&self, i: usize, j: usize) -> f64 {
        let offset = j as isize - i as isize;
        match self.offsets.iter().position(|&o| o == offset) {
            Some(k) if i < self.n_rows && j < self.n_cols => self.data[[k, j]],
            _ => 0.0,
        }
    }
}
