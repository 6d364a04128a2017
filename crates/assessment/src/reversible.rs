//! Detailed-balance check.

use std::borrow::Cow;

use stochmat_matrix::MatrixView;
use stochmat_stationary::{DirectSolver, StationarySolver};
use tracing::debug;

use crate::config::validate_tolerance;
use crate::error::AssessmentError;
use crate::square_dim;

/// Checks whether `t` satisfies detailed balance.
///
/// Holds when `|pi_i * T[i, j] - pi_j * T[j, i]| <= tol` for every pair of
/// states. `tol` is an absolute bound on the flux difference, not a
/// relative one. When `pi` is `None` it is computed with [`DirectSolver`];
/// use [`is_reversible_with`] to supply another solver.
///
/// # Errors
///
/// Returns [`AssessmentError::NotSquare`],
/// [`AssessmentError::InvalidTolerance`] or
/// [`AssessmentError::DimensionMismatch`] (wrong `pi` length) before any
/// computation, and [`AssessmentError::Stationary`] if the solver fails.
pub fn is_reversible<M: MatrixView + ?Sized>(
    t: &M,
    tol: f64,
    pi: Option<&[f64]>,
) -> Result<bool, AssessmentError> {
    is_reversible_with(t, tol, pi, &DirectSolver)
}

/// [`is_reversible`] with an explicit stationary distribution solver.
///
/// The solver runs only when `pi` is `None`.
///
/// # Errors
///
/// See [`is_reversible`].
pub fn is_reversible_with<M, S>(
    t: &M,
    tol: f64,
    pi: Option<&[f64]>,
    solver: &S,
) -> Result<bool, AssessmentError>
where
    M: MatrixView + ?Sized,
    S: StationarySolver,
{
    let n = square_dim(t)?;
    validate_tolerance(tol)?;
    if let Some(p) = pi.filter(|p| p.len() != n) {
        return Err(AssessmentError::DimensionMismatch {
            expected: n,
            got: p.len(),
        });
    }
    if n == 0 {
        return Ok(true);
    }

    let pi: Cow<'_, [f64]> = match pi {
        Some(p) => Cow::Borrowed(p),
        None => Cow::Owned(solver.solve(t)?.to_vec()),
    };

    for i in 0..n {
        for (j, _) in t.row_entries(i) {
            if j == i {
                continue;
            }
            // Looked up rather than taken from the iterator so that repeated
            // compressed-row entries are summed.
            let forward = pi[i] * t.entry(i, j);
            let backward = pi[j] * t.entry(j, i);
            let diff = (forward - backward).abs();
            if diff.is_nan() || diff > tol {
                debug!(i, j, forward, backward, tol, "detailed balance violated");
                return Ok(false);
            }
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use stochmat_stationary::StationaryError;

    #[test]
    fn symmetric_chain_is_reversible() {
        let t = array![[0.5, 0.25, 0.25], [0.25, 0.5, 0.25], [0.25, 0.25, 0.5]];
        let pi = [1.0 / 3.0; 3];
        assert!(is_reversible(&t, 1e-15, Some(&pi[..])).unwrap());
    }

    #[test]
    fn cyclic_chain_is_not_reversible() {
        // Probability mass circulates 0 -> 1 -> 2 -> 0.
        let t = array![[0.1, 0.8, 0.1], [0.1, 0.1, 0.8], [0.8, 0.1, 0.1]];
        assert!(!is_reversible(&t, 1e-10, None).unwrap());
    }

    #[test]
    fn two_state_chain_solved_internally() {
        // Every two-state chain is reversible.
        let t = array![[0.9, 0.1], [0.3, 0.7]];
        assert!(is_reversible(&t, 1e-12, None).unwrap());
    }

    #[test]
    fn one_sided_edge_is_caught() {
        // T[0, 1] = 0 but T[1, 0] > 0.
        let t = array![[1.0, 0.0], [0.5, 0.5]];
        let pi = [0.5, 0.5];
        assert!(!is_reversible(&t, 1e-12, Some(&pi[..])).unwrap());
    }

    #[test]
    fn wrong_pi_length() {
        let t = array![[0.5, 0.5], [0.5, 0.5]];
        let pi = [1.0];
        assert_eq!(
            is_reversible(&t, 1e-12, Some(&pi[..])),
            Err(AssessmentError::DimensionMismatch {
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn solver_error_propagates() {
        let t = array![[1.0, 0.0], [0.0, 1.0]];
        let r = is_reversible(&t, 1e-12, None);
        assert!(matches!(
            r,
            Err(AssessmentError::Stationary(StationaryError::Singular { .. }))
        ));
    }

    #[test]
    fn nan_flux_is_not_reversible() {
        let t = array![[0.5, f64::NAN], [0.5, 0.5]];
        let pi = [0.5, 0.5];
        assert!(!is_reversible(&t, 1e-12, Some(&pi[..])).unwrap());
    }

    #[test]
    fn empty_matrix_is_reversible() {
        let t = ndarray::Array2::<f64>::zeros((0, 0));
        assert!(is_reversible(&t, 0.0, None).unwrap());
    }
}
