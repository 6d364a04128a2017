//! Row-sum and sign checks for transition and rate matrices.

use stochmat_matrix::{CompensatedSum, MatrixView};
use tracing::debug;

use crate::config::validate_tolerance;
use crate::error::AssessmentError;
use crate::square_dim;

/// Checks whether `t` is a transition (row-stochastic) matrix.
///
/// Holds when every stored entry is finite and `>= -tol`, and every row
/// sums to 1 within `tol`. Sparse rows are summed over their stored entries
/// only; implicit zeros satisfy the sign condition trivially. Row sums are
/// compensated, so `tol` as small as `f64::EPSILON` holds on wide rows.
///
/// # Errors
///
/// Returns [`AssessmentError::NotSquare`] or
/// [`AssessmentError::InvalidTolerance`] before reading any entry.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use stochmat_assessment::is_transition_matrix;
///
/// let absorbing = array![[1.0, 0.0], [0.3, 0.7]];
/// assert!(is_transition_matrix(&absorbing, 1e-12).unwrap());
///
/// let leaky = array![[0.5, 0.4], [0.3, 0.7]];
/// assert!(!is_transition_matrix(&leaky, 1e-12).unwrap());
/// ```
pub fn is_transition_matrix<M: MatrixView + ?Sized>(
    t: &M,
    tol: f64,
) -> Result<bool, AssessmentError> {
    let n = square_dim(t)?;
    validate_tolerance(tol)?;

    for i in 0..n {
        let mut sum = CompensatedSum::new();
        for (j, v) in t.row_entries(i) {
            if !v.is_finite() || v < -tol {
                debug!(row = i, col = j, value = v, "entry violates transition matrix sign");
                return Ok(false);
            }
            sum.add(v);
        }
        let sum = sum.value();
        if (sum - 1.0).abs() > tol {
            debug!(row = i, sum, tol, "row sum differs from 1");
            return Ok(false);
        }
    }
    Ok(true)
}

/// Checks whether `k` is a rate (generator) matrix.
///
/// Holds when every stored entry is finite, every off-diagonal entry is
/// `>= -tol`, and every row, diagonal included, sums to 0 within `tol`.
/// The diagonal is read in place; nothing is zeroed or rewritten.
///
/// # Errors
///
/// Returns [`AssessmentError::NotSquare`] or
/// [`AssessmentError::InvalidTolerance`] before reading any entry.
pub fn is_rate_matrix<M: MatrixView + ?Sized>(k: &M, tol: f64) -> Result<bool, AssessmentError> {
    let n = square_dim(k)?;
    validate_tolerance(tol)?;

    for i in 0..n {
        let mut sum = CompensatedSum::new();
        for (j, v) in k.row_entries(i) {
            if !v.is_finite() {
                debug!(row = i, col = j, "non-finite rate");
                return Ok(false);
            }
            if j != i && v < -tol {
                debug!(row = i, col = j, value = v, "negative off-diagonal rate");
                return Ok(false);
            }
            sum.add(v);
        }
        let sum = sum.value();
        if sum.abs() > tol {
            debug!(row = i, sum, tol, "rate row does not sum to 0");
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, array};

    #[test]
    fn transition_ok() {
        let t = array![[0.5, 0.3, 0.2], [0.1, 0.7, 0.2], [0.2, 0.3, 0.5]];
        assert!(is_transition_matrix(&t, 1e-12).unwrap());
    }

    #[test]
    fn transition_bad_row_sum() {
        let t = array![[0.5, 0.3, 0.3], [0.1, 0.7, 0.2], [0.2, 0.3, 0.5]];
        assert!(!is_transition_matrix(&t, 1e-6).unwrap());
        // Passes once the tolerance covers the excess.
        assert!(is_transition_matrix(&t, 0.2).unwrap());
    }

    #[test]
    fn transition_negative_entry() {
        let t = array![[1.1, -0.1], [0.0, 1.0]];
        assert!(!is_transition_matrix(&t, 1e-12).unwrap());
    }

    #[test]
    fn transition_tiny_negative_within_tol() {
        let t = array![[1.0 + 1e-14, -1e-14], [0.0, 1.0]];
        assert!(is_transition_matrix(&t, 1e-12).unwrap());
    }

    #[test]
    fn transition_nan_is_false() {
        let t = array![[f64::NAN, 1.0], [0.0, 1.0]];
        assert!(!is_transition_matrix(&t, 1e-12).unwrap());
    }

    #[test]
    fn transition_zero_row_is_false() {
        let t = array![[0.0, 0.0], [0.0, 1.0]];
        assert!(!is_transition_matrix(&t, 1e-12).unwrap());
    }

    #[test]
    fn transition_not_square() {
        let t = Array2::<f64>::zeros((2, 3));
        assert_eq!(
            is_transition_matrix(&t, 1e-12),
            Err(AssessmentError::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn transition_negative_tolerance() {
        let t = array![[1.0]];
        assert_eq!(
            is_transition_matrix(&t, -1.0),
            Err(AssessmentError::InvalidTolerance { tol: -1.0 })
        );
    }

    #[test]
    fn transition_empty_matrix() {
        let t = Array2::<f64>::zeros((0, 0));
        assert!(is_transition_matrix(&t, 0.0).unwrap());
    }

    #[test]
    fn rate_ok() {
        let k = array![[-3.0, 2.0, 1.0], [0.5, -0.5, 0.0], [1.0, 1.0, -2.0]];
        assert!(is_rate_matrix(&k, 1e-12).unwrap());
    }

    #[test]
    fn rate_negative_off_diagonal() {
        let k = array![[0.0, 1.0, -1.0], [0.5, -0.5, 0.0], [1.0, 1.0, -2.0]];
        assert!(!is_rate_matrix(&k, 1e-12).unwrap());
    }

    #[test]
    fn rate_bad_row_sum() {
        let k = array![[-1.0, 2.0], [1.0, -1.0]];
        assert!(!is_rate_matrix(&k, 1e-12).unwrap());
    }

    #[test]
    fn transition_matrix_is_not_rate_matrix() {
        let t = array![[0.5, 0.5], [0.5, 0.5]];
        assert!(!is_rate_matrix(&t, 1e-12).unwrap());
    }

    #[test]
    fn rate_positive_diagonal_is_caught_by_sum() {
        let k = array![[1.0, 0.0], [0.0, 0.0]];
        assert!(!is_rate_matrix(&k, 1e-12).unwrap());
    }

    #[test]
    fn repeated_calls_agree() {
        let t = array![[0.25, 0.75], [0.6, 0.4]];
        let a = is_transition_matrix(&t, 1e-12).unwrap();
        let b = is_transition_matrix(&t, 1e-12).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            is_rate_matrix(&t, 1e-12).unwrap(),
            is_rate_matrix(&t, 1e-12).unwrap()
        );
    }
}
