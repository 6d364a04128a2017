//! The storage-tagged generator matrix.

use ndarray::Array2;

use crate::csr::CsrMatrix;
use crate::dia::DiaMatrix;
use crate::view::{MatrixView, RowEntries};

/// A transition or rate matrix in one of the supported storage layouts.
///
/// Each variant keeps its native layout; [`MatrixView`] dispatches to it
/// without converting to a canonical form.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorMatrix {
    /// Dense row-major storage.
    Dense(Array2<f64>),
    /// Compressed-row sparse storage.
    Csr(CsrMatrix),
    /// Diagonal-banded sparse storage.
    Banded(DiaMatrix),
}

impl GeneratorMatrix {
    /// Returns `true` for the two sparse layouts.
    pub fn is_sparse(&self) -> bool {
        !matches!(self, GeneratorMatrix::Dense(_))
    }

    /// Short name of the storage layout, used in log output.
    pub fn layout(&self) -> &'static str {
        match self {
            GeneratorMatrix::Dense(_) => "dense",
            GeneratorMatrix::Csr(_) => "csr",
            GeneratorMatrix::Banded(_) => "banded",
        }
    }

    /// Expands into a dense array. Intended for small matrices and tests.
    pub fn to_dense(&self) -> Array2<f64> {
        match self {
            GeneratorMatrix::Dense(a) => a.clone(),
            GeneratorMatrix::Csr(m) => m.to_dense(),
            GeneratorMatrix::Banded(m) => m.to_dense(),
        }
    }
}

impl MatrixView for GeneratorMatrix {
    fn shape(&self) -> (usize, usize) {
        match self {
            GeneratorMatrix::Dense(a) => a.dim(),
            GeneratorMatrix::Csr(m) => m.shape(),
            GeneratorMatrix::Banded(m) => m.shape(),
        }
    }

    fn row_entries(&self, i: usize) -> RowEntries<'_> {
        match self {
            GeneratorMatrix::Dense(a) => a.row_entries(i),
            GeneratorMatrix::Csr(m) => m.row_entries(i),
            GeneratorMatrix::Banded(m) => m.row_entries(i),
        }
    }

    fn entry(&self, i: usize, j: usize) -> f64 {
        match self {
            GeneratorMatrix::Dense(a) => a[[i, j]],
            GeneratorMatrix::Csr(m) => m.entry(i, j),
            GeneratorMatrix::Banded(m) => m.entry(i, j),
        }
    }

    fn row_sum(&self, i: usize) -> f64 {
        match self {
            GeneratorMatrix::Dense(a) => a.row(i).sum(),
            GeneratorMatrix::Csr(m) => m.row_sum(i),
            GeneratorMatrix::Banded(m) => m.row_sum(i),
        }
    }
}

impl From<Array2<f64>> for GeneratorMatrix {
    fn from(a: Array2<f64>) -> Self {
        GeneratorMatrix::Dense(a)
    }
}

impl From<CsrMatrix> for GeneratorMatrix {
    fn from(m: CsrMatrix) -> Self {
        GeneratorMatrix::Csr(m)
    }
}

impl From<DiaMatrix> for GeneratorMatrix {
    fn from(m: DiaMatrix) -> Self {
        GeneratorMatrix::Banded(m)
    }
}
