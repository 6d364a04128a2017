//! Posterior sampling of non-reversible transition matrices.
//!
//! Given a matrix `Z` of observed transition counts, each row of the
//! transition matrix has a Dirichlet posterior under a flat prior:
//!
//! ```text
//! P[i, :] ~ Dirichlet(Z[i, :] + prior)        prior = 1 by default
//! ```
//!
//! Rows are independent because no reversibility constraint couples them.
//! [`NonReversibleSampler`] draws every row by gamma normalization into an
//! owned buffer that is overwritten on each [`update`](NonReversibleSampler::update).
//!
//! # Quick start
//!
//! ```
//! use ndarray::array;
//! use stochmat_sampler::{NonReversibleSampler, SamplerConfig};
//!
//! let counts = array![[90.0, 10.0], [30.0, 70.0]];
//! let config = SamplerConfig::new().with_seed(7);
//! let mut sampler = NonReversibleSampler::from_config(&counts, &config).unwrap();
//!
//! let draw = sampler.sample(1, true).unwrap();
//! assert!(draw.stationary().is_some());
//! let row_sum: f64 = draw.transition().row(0).sum();
//! assert!((row_sum - 1.0).abs() < 1e-12);
//! ```
//!
//! A sampler is a single-writer object: `update` and `sample` take
//! `&mut self`. Share one between threads only behind a lock.

pub mod config;
pub mod error;
pub mod sampler;

pub use config::SamplerConfig;
pub use error::SamplerError;
pub use sampler::{Draw, NonReversibleSampler};
