//! Storage for generator matrices of Markov chains.
//!
//! A generator matrix is either a transition matrix (rows sum to 1) or a
//! rate matrix (rows sum to 0). This crate does not check either property;
//! it only provides the storage variants and a single row-oriented
//! interface that the predicates and samplers downstream are written
//! against.
//!
//! | Variant | Type | Row access |
//! |---------|------|------------|
//! | Dense | [`ndarray::Array2<f64>`] | contiguous row slice |
//! | Compressed-row | [`CsrMatrix`] | `row_ptr[i]..row_ptr[i + 1]` |
//! | Banded | [`DiaMatrix`] | one lookup per stored diagonal |
//!
//! # Quick start
//!
//! ```
//! use ndarray::array;
//! use stochmat_matrix::{CsrMatrix, GeneratorMatrix, MatrixView};
//!
//! let dense = GeneratorMatrix::from(array![[0.5, 0.5], [0.2, 0.8]]);
//! assert!((dense.row_sum(1) - 1.0).abs() < 1e-12);
//!
//! let sparse = CsrMatrix::from_triplets(2, 2, &[(0, 1, 1.0), (1, 0, 1.0)]).unwrap();
//! assert_eq!(sparse.entry(0, 1), 1.0);
//! assert_eq!(sparse.entry(0, 0), 0.0);
//! ```

pub mod csr;
pub mod dia;
pub mod error;
pub mod generator;
pub mod sum;
pub mod view;

mod dense;

pub use csr::CsrMatrix;
pub use dia::DiaMatrix;
pub use error::MatrixError;
pub use generator::GeneratorMatrix;
pub use sum::{CompensatedSum, compensated_sum};
pub use view::{MatrixView, RowEntries};
