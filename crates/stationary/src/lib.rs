//! Stationary distributions of transition matrices.
//!
//! The predicates and samplers of the workspace consume a stationary
//! distribution through the [`StationarySolver`] trait. [`DirectSolver`] is
//! the reference implementation: it solves the balance equations exactly
//! by Gaussian elimination, which suits small and moderate state counts.
//!
//! ```
//! use ndarray::array;
//! use stochmat_stationary::stationary_distribution;
//!
//! let t = array![[0.9, 0.1], [0.5, 0.5]];
//! let pi = stationary_distribution(&t).unwrap();
//! assert!((pi[0] - 5.0 / 6.0).abs() < 1e-12);
//! ```

pub mod error;
pub mod solver;

pub use error::StationaryError;
pub use solver::{DirectSolver, StationarySolver, stationary_distribution};
