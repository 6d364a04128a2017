//! Compressed-row sparse storage.

use ndarray::Array2;

use crate::error::MatrixError;
use crate::sum::compensated_sum;
use crate::view::{MatrixView, RowEntries};

/// A sparse matrix in compressed-row (CSR) layout.
///
/// Row `i` owns the stored entries `row_ptr[i]..row_ptr[i + 1]` of
/// `col_indices` and `values`. Columns within a row need not be sorted and
/// may repeat; repeated entries are summed by [`entry`](MatrixView::entry)
/// and [`row_sum`](MatrixView::row_sum).
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix {
    n_rows: usize,
    n_cols: usize,
    row_ptr: Vec<usize>,
    col_indices: Vec<usize>,
    values: Vec<f64>,
}

impl CsrMatrix {
    /// Builds a CSR matrix from its three arrays.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError`] if `row_ptr` does not have `n_rows + 1`
    /// non-decreasing entries starting at 0, if its last entry differs from
    /// the number of values or column indices, or if a column index is
    /// `>= n_cols`.
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        row_ptr: Vec<usize>,
        col_indices: Vec<usize>,
        values: Vec<f64>,
    ) -> Result<Self, MatrixError> {
        if row_ptr.len() != n_rows + 1 {
            return Err(MatrixError::RowPointerLength {
                expected: n_rows + 1,
                got: row_ptr.len(),
            });
        }
        if row_ptr[0] != 0 {
            return Err(MatrixError::RowPointerStart { start: row_ptr[0] });
        }
        if let Some(row) = row_ptr.windows(2).position(|w| w[1] < w[0]) {
            return Err(MatrixError::RowPointerNotMonotone { row });
        }
        let end = row_ptr[n_rows];
        if values.len() != end || col_indices.len() != end {
            return Err(MatrixError::EntryCountMismatch {
                values: values.len(),
                indices: col_indices.len(),
                end,
            });
        }
        if let Some(&col) = col_indices.iter().find(|&&c| c >= n_cols) {
            return Err(MatrixError::ColumnOutOfBounds { col, n_cols });
        }
        Ok(Self {
            n_rows,
            n_cols,
            row_ptr,
            col_indices,
            values,
        })
    }

    /// Assembles a CSR matrix from `(row, col, value)` triplets.
    ///
    /// Entries are sorted by row and column; duplicate positions are summed
    /// into one stored entry.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::TripletIndexOutOfBounds`] if a triplet lies
    /// outside `n_rows x n_cols`.
    pub fn from_triplets(
        n_rows: usize,
        n_cols: usize,
        triplets: &[(usize, usize, f64)],
    ) -> Result<Self, MatrixError> {
        if let Some(&(row, col, _)) = triplets
            .iter()
            .find(|&&(r, c, _)| r >= n_rows || c >= n_cols)
        {
            return Err(MatrixError::TripletIndexOutOfBounds {
                row,
                col,
                n_rows,
                n_cols,
            });
        }

        let mut sorted = triplets.to_vec();
        sorted.sort_by_key(|&(r, c, _)| (r, c));

        let mut row_ptr = vec![0usize; n_rows + 1];
        let mut col_indices = Vec::with_capacity(sorted.len());
        let mut values: Vec<f64> = Vec::with_capacity(sorted.len());
        let mut last: Option<(usize, usize)> = None;
        for (r, c, v) in sorted {
            if last == Some((r, c)) {
                if let Some(tail) = values.last_mut() {
                    *tail += v;
                }
                continue;
            }
            col_indices.push(c);
            values.push(v);
            row_ptr[r + 1] += 1;
            last = Some((r, c));
        }
        for i in 0..n_rows {
            row_ptr[i + 1] += row_ptr[i];
        }

        Self::new(n_rows, n_cols, row_ptr, col_indices, values)
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Row pointer array (`n_rows + 1` entries).
    pub fn row_ptr(&self) -> &[usize] {
        &self.row_ptr
    }

    /// Column index of every stored entry.
    pub fn col_indices(&self) -> &[usize] {
        &self.col_indices
    }

    /// Value of every stored entry.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    fn row_range(&self, i: usize) -> std::ops::Range<usize> {
        self.row_ptr[i]..self.row_ptr[i + 1]
    }

    /// Returns a copy with every row divided by its sum.
    ///
    /// Rows that are empty or sum to zero are copied unchanged. `self` is
    /// not modified.
    pub fn normalize_rows(&self) -> CsrMatrix {
        let mut values = self.values.clone();
        for i in 0..self.n_rows {
            let range = self.row_range(i);
            let s = compensated_sum(values[range.clone()].iter().copied());
            if s != 0.0 {
                for v in &mut values[range] {
                    *v /= s;
                }
            }
        }
        CsrMatrix {
            values,
            ..self.clone()
        }
    }

    /// Expands into a dense array. Intended for small matrices and tests.
    pub fn to_dense(&self) -> Array2<f64> {
        let mut out = Array2::zeros((self.n_rows, self.n_cols));
        for i in 0..self.n_rows {
            for (j, v) in self.row_entries(i) {
                out[[i, j]] += v;
            }
        }
        out
    }
}

impl MatrixView for CsrMatrix {
    fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    fn row_entries(&self, i: usize) -> RowEntries<'_> {
        let range = self.row_range(i);
        RowEntries::Compressed {
            cols: self.col_indices[range.clone()].iter(),
            values: self.values[range].iter(),
        }
    }

    fn entry(&self, i: usize, j: usize) -> f64 {
        self.row_entries(i)
            .filter(|&(c, _)| c == j)
            .map(|(_, v)| v)
            .sum()
    }

    fn row_sum(&self, i: usize) -> f64 {
        compensated_sum(self.values[self.row_range(i)].iter().copied())
    }
}
