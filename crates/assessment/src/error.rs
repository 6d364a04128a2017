//! Error types for the stochmat-assessment crate.

use stochmat_stationary::StationaryError;

/// Error type for all fallible operations in the stochmat-assessment crate.
///
/// A matrix failing a property is not an error; predicates return
/// `Ok(false)` for that.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssessmentError {
    /// Returned when the matrix is not square.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Returned when a supplied vector does not match the matrix dimension.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Matrix dimension.
        expected: usize,
        /// Length of the supplied vector.
        got: usize,
    },

    /// Returned when the tolerance is negative or non-finite.
    #[error("tolerance must be finite and non-negative, got {tol}")]
    InvalidTolerance {
        /// The invalid tolerance.
        tol: f64,
    },

    /// Returned when the stationary distribution solver fails.
    #[error("stationary distribution failed: {0}")]
    Stationary(#[from] StationaryError),
}
