//! Structural predicates over generator matrices.
//!
//! Every predicate borrows its input, so caller storage (including the
//! band and offset arrays of a [`DiaMatrix`](stochmat_matrix::DiaMatrix))
//! cannot change during a check. Shape problems and invalid tolerances are
//! reported as [`AssessmentError`]; a matrix that simply fails the property
//! yields `Ok(false)`.
//!
//! | Predicate | Property |
//! |-----------|----------|
//! | [`is_transition_matrix`] | entries >= -tol, rows sum to 1 |
//! | [`is_rate_matrix`] | off-diagonal >= -tol, rows sum to 0 |
//! | [`is_reversible`] | detailed balance against the stationary distribution |
//! | [`is_connected`] | strongly (directed) or weakly (undirected) connected |
//!
//! # Quick start
//!
//! ```
//! use ndarray::array;
//! use stochmat_assessment::{DEFAULT_TOLERANCE, is_connected, is_transition_matrix};
//!
//! let t = array![[0.9, 0.1], [0.5, 0.5]];
//! assert!(is_transition_matrix(&t, DEFAULT_TOLERANCE).unwrap());
//! assert!(is_connected(&t, true).unwrap());
//! ```

pub mod config;
pub mod connectivity;
pub mod error;
pub mod reversible;
pub mod stochastic;

pub use config::DEFAULT_TOLERANCE;
pub use connectivity::{is_connected, strongly_connected_components, weakly_connected_components};
pub use error::AssessmentError;
pub use reversible::{is_reversible, is_reversible_with};
pub use stochastic::{is_rate_matrix, is_transition_matrix};

use stochmat_matrix::MatrixView;

/// Rejects non-square matrices and returns the dimension.
pub(crate) fn square_dim<M: MatrixView + ?Sized>(m: &M) -> Result<usize, AssessmentError> {
    let (rows, cols) = m.shape();
    if rows != cols {
        return Err(AssessmentError::NotSquare { rows, cols });
    }
    Ok(rows)
}
