//! The solver seam and the direct reference solver.

use ndarray::{Array1, Array2};
use stochmat_matrix::MatrixView;
use tracing::debug;

use crate::error::StationaryError;

/// Pivots with magnitude below this are treated as zero.
const PIVOT_TOL: f64 = 1e-12;

/// Computes the stationary distribution of a transition matrix.
///
/// Implementations return a probability vector `pi` with `pi . T = pi` and
/// `sum(pi) = 1`. Errors are reported as [`StationaryError`] and are passed
/// through unchanged by every consumer in the workspace.
pub trait StationarySolver {
    /// Solves for the stationary distribution of `t`.
    fn solve<M: MatrixView + ?Sized>(&self, t: &M) -> Result<Array1<f64>, StationaryError>;
}

/// Exact solver based on Gaussian elimination with partial pivoting.
///
/// Builds the dense `N x N` system `(T' - I) pi = 0`, replaces the last
/// balance equation with `sum(pi) = 1`, and solves it directly. Memory is
/// `O(N^2)` and time `O(N^3)` regardless of the input layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectSolver;

impl StationarySolver for DirectSolver {
    #[tracing::instrument(level = "debug", skip_all, fields(n = t.dim()))]
    fn solve<M: MatrixView + ?Sized>(&self, t: &M) -> Result<Array1<f64>, StationaryError> {
        let (rows, cols) = t.shape();
        if rows != cols {
            return Err(StationaryError::NotSquare { rows, cols });
        }
        let n = rows;
        if n == 0 {
            return Err(StationaryError::EmptyMatrix);
        }

        // Row j of `a` is the balance equation of state j.
        let mut a = Array2::<f64>::zeros((n, n));
        for i in 0..n {
            for (j, v) in t.row_entries(i) {
                if !v.is_finite() {
                    return Err(StationaryError::NonFiniteEntry { row: i, col: j });
                }
                a[[j, i]] += v;
            }
        }
        for j in 0..n {
            a[[j, j]] -= 1.0;
        }
        a.row_mut(n - 1).fill(1.0);
        let mut b = Array1::<f64>::zeros(n);
        b[n - 1] = 1.0;

        solve_in_place(&mut a, &mut b)?;

        b.mapv_inplace(|p| p.max(0.0));
        let total = b.sum();
        if total <= 0.0 || !total.is_finite() {
            return Err(StationaryError::Singular { pivot: n - 1 });
        }
        b /= total;
        debug!(n, "stationary distribution solved");
        Ok(b)
    }
}

/// Solves `a x = b`, leaving `x` in `b`. `a` is destroyed.
fn solve_in_place(a: &mut Array2<f64>, b: &mut Array1<f64>) -> Result<(), StationaryError> {
    let n = b.len();

    for col in 0..n {
        let mut pivot_row = col;
        let mut pivot_abs = a[[col, col]].abs();
        for r in (col + 1)..n {
            let v = a[[r, col]].abs();
            if v > pivot_abs {
                pivot_abs = v;
                pivot_row = r;
            }
        }
        if pivot_abs < PIVOT_TOL {
            return Err(StationaryError::Singular { pivot: col });
        }
        if pivot_row != col {
            for c in col..n {
                a.swap([col, c], [pivot_row, c]);
            }
            b.swap(col, pivot_row);
        }

        let pivot = a[[col, col]];
        for r in (col + 1)..n {
            let factor = a[[r, col]] / pivot;
            if factor == 0.0 {
                continue;
            }
            for c in col..n {
                a[[r, c]] -= factor * a[[col, c]];
            }
            b[r] -= factor * b[col];
        }
    }

    for row in (0..n).rev() {
        let mut acc = b[row];
        for c in (row + 1)..n {
            acc -= a[[row, c]] * b[c];
        }
        b[row] = acc / a[[row, row]];
    }
    Ok(())
}

/// Stationary distribution of `t` using [`DirectSolver`].
///
/// # Errors
///
/// Returns [`StationaryError`] if `t` is not square, empty, holds
/// non-finite values, or has no unique stationary distribution.
pub fn stationary_distribution<M: MatrixView + ?Sized>(
    t: &M,
) -> Result<Array1<f64>, StationaryError> {
    DirectSolver.solve(t)
}
