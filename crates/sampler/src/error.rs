//! Error types for the stochmat-sampler crate.

use stochmat_stationary::StationaryError;

/// Error type for all fallible operations in the stochmat-sampler crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SamplerError {
    /// Returned when the count matrix is not square.
    #[error("count matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Returned when a count is negative.
    #[error("negative count {value} at ({row}, {col})")]
    NegativeCount {
        /// Row of the count.
        row: usize,
        /// Column of the count.
        col: usize,
        /// The negative value.
        value: f64,
    },

    /// Returned when a count is NaN or infinite.
    #[error("non-finite count at ({row}, {col})")]
    NonFiniteCount {
        /// Row of the count.
        row: usize,
        /// Column of the count.
        col: usize,
    },

    /// Returned when the prior pseudo-count is non-finite or non-positive.
    #[error("prior must be finite and positive, got {prior}")]
    InvalidPrior {
        /// The invalid prior.
        prior: f64,
    },

    /// Returned when the stationary distribution solver fails.
    #[error("stationary distribution failed: {0}")]
    Stationary(#[from] StationaryError),
}
