//! [`MatrixView`] for ndarray dense storage.

use ndarray::{Array2, ArrayView2};

use crate::sum::compensated_sum;
use crate::view::{MatrixView, RowEntries};

impl MatrixView for Array2<f64> {
    fn shape(&self) -> (usize, usize) {
        self.dim()
    }

    fn row_entries(&self, i: usize) -> RowEntries<'_> {
        RowEntries::Dense {
            values: self.row(i).into_iter(),
            col: 0,
        }
    }

    fn entry(&self, i: usize, j: usize) -> f64 {
        self[[i, j]]
    }

    fn row_sum(&self, i: usize) -> f64 {
        compensated_sum(self.row(i).iter().copied())
    }
}

impl MatrixView for ArrayView2<'_, f64> {
    fn shape(&self) -> (usize, usize) {
        self.dim()
    }

    fn row_entries(&self, i: usize) -> RowEntries<'_> {
        RowEntries::Dense {
            values: self.row(i).into_iter(),
            col: 0,
        }
    }

    fn entry(&self, i: usize, j: usize) -> f64 {
        self[[i, j]]
    }

    fn row_sum(&self, i: usize) -> f64 {
        compensated_sum(self.row(i).iter().copied())
    }
}
