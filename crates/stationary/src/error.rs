//! Error types for the stochmat-stationary crate.

/// Error type for stationary distribution solvers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StationaryError {
    /// Returned when the matrix is not square.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Returned when the matrix has no states.
    #[error("matrix has no states")]
    EmptyMatrix,

    /// Returned when the matrix holds NaN or infinity.
    #[error("non-finite entry at ({row}, {col})")]
    NonFiniteEntry {
        /// Row of the entry.
        row: usize,
        /// Column of the entry.
        col: usize,
    },

    /// Returned when the balance equations have no unique solution.
    ///
    /// This happens for reducible chains, whose stationary distribution is
    /// not unique.
    #[error("balance equations are singular at pivot {pivot}")]
    Singular {
        /// Elimination step at which no usable pivot was found.
        pivot: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_not_square() {
        let e = StationaryError::NotSquare { rows: 2, cols: 3 };
        assert_eq!(e.to_string(), "matrix is not square: 2x3");
    }

    #[test]
    fn error_empty() {
        assert_eq!(StationaryError::EmptyMatrix.to_string(), "matrix has no states");
    }

    #[test]
    fn error_non_finite() {
        let e = StationaryError::NonFiniteEntry { row: 1, col: 0 };
        assert_eq!(e.to_string(), "non-finite entry at (1, 0)");
    }

    #[test]
    fn error_singular() {
        let e = StationaryError::Singular { pivot: 4 };
        assert_eq!(e.to_string(), "balance equations are singular at pivot 4");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<StationaryError>();
    }
}
