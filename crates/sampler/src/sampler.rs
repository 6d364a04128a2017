//! The non-reversible Dirichlet posterior sampler.

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Gamma};
use stochmat_matrix::{CompensatedSum, MatrixView};
use stochmat_stationary::{DirectSolver, StationarySolver};
use tracing::{debug, trace};

use crate::config::SamplerConfig;
use crate::error::SamplerError;

/// One posterior draw returned by [`NonReversibleSampler::sample`].
#[derive(Debug)]
pub struct Draw<'a> {
    transition: &'a Array2<f64>,
    stationary: Option<Array1<f64>>,
}

impl<'a> Draw<'a> {
    /// The sampled transition matrix.
    pub fn transition(&self) -> &'a Array2<f64> {
        self.transition
    }

    /// Stationary distribution of the sampled matrix, if requested.
    pub fn stationary(&self) -> Option<&Array1<f64>> {
        self.stationary.as_ref()
    }

    /// Splits the draw into its transition matrix and stationary distribution.
    pub fn into_parts(self) -> (&'a Array2<f64>, Option<Array1<f64>>) {
        (self.transition, self.stationary)
    }
}

/// Samples transition matrices from the row-wise Dirichlet posterior.
///
/// Holds the count matrix `Z`, the Dirichlet parameters
/// `alpha = Z + prior`, and the current draw `P`. Construction performs the
/// first draw; every [`update`](Self::update) overwrites `P` in place and
/// leaves `Z` and `alpha` untouched.
///
/// No internal locking is done; `update` and `sample` need `&mut self`.
#[derive(Debug)]
pub struct NonReversibleSampler<R = StdRng, S = DirectSolver> {
    counts: Array2<f64>,
    alpha: Array2<f64>,
    /// `Gamma(alpha[i, j], 1)` for every entry, row-major.
    gammas: Vec<Gamma<f64>>,
    p: Array2<f64>,
    rng: R,
    solver: S,
    n_updates: u64,
}

impl NonReversibleSampler {
    /// Creates a sampler with the default prior and an OS-seeded RNG.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::NotSquare`] if `counts` is not square, or
    /// [`SamplerError::NegativeCount`] / [`SamplerError::NonFiniteCount`]
    /// for invalid counts.
    pub fn new<M: MatrixView + ?Sized>(counts: &M) -> Result<Self, SamplerError> {
        Self::from_config(counts, &SamplerConfig::default())
    }

    /// Creates a sampler from a configuration.
    ///
    /// The RNG is seeded from `config.seed()` when set, otherwise from the
    /// operating system.
    ///
    /// # Errors
    ///
    /// As [`new`](Self::new), plus [`SamplerError::InvalidPrior`].
    pub fn from_config<M: MatrixView + ?Sized>(
        counts: &M,
        config: &SamplerConfig,
    ) -> Result<Self, SamplerError> {
        let rng = match config.seed() {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        NonReversibleSampler::with_rng(counts, config, rng)
    }
}

impl<R: Rng> NonReversibleSampler<R, DirectSolver> {
    /// Creates a sampler driven by the given RNG.
    ///
    /// `config.seed()` is ignored; the RNG is used as supplied.
    ///
    /// # Errors
    ///
    /// As [`from_config`](NonReversibleSampler::from_config).
    #[tracing::instrument(skip(counts, config, rng), fields(n = counts.dim()))]
    pub fn with_rng<M: MatrixView + ?Sized>(
        counts: &M,
        config: &SamplerConfig,
        rng: R,
    ) -> Result<Self, SamplerError> {
        config.validate()?;
        let (rows, cols) = counts.shape();
        if rows != cols {
            return Err(SamplerError::NotSquare { rows, cols });
        }
        let n = rows;

        let mut z = Array2::<f64>::zeros((n, n));
        for i in 0..n {
            for (j, v) in counts.row_entries(i) {
                if !v.is_finite() {
                    return Err(SamplerError::NonFiniteCount { row: i, col: j });
                }
                if v < 0.0 {
                    return Err(SamplerError::NegativeCount {
                        row: i,
                        col: j,
                        value: v,
                    });
                }
                z[[i, j]] += v;
            }
        }

        let prior = config.prior();
        let alpha = z.mapv(|c| c + prior);
        let gammas = alpha
            .iter()
            .map(|&a| Gamma::new(a, 1.0))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| SamplerError::InvalidPrior { prior })?;

        let mut sampler = Self {
            counts: z,
            alpha,
            gammas,
            p: Array2::zeros((n, n)),
            rng,
            solver: DirectSolver,
            n_updates: 0,
        };
        sampler.update(1);
        debug!(n, prior, "sampler initialized");
        Ok(sampler)
    }
}

impl<R: Rng, S: StationarySolver> NonReversibleSampler<R, S> {
    /// Replaces the stationary distribution solver used by [`sample`](Self::sample).
    pub fn with_solver<S2: StationarySolver>(self, solver: S2) -> NonReversibleSampler<R, S2> {
        NonReversibleSampler {
            counts: self.counts,
            alpha: self.alpha,
            gammas: self.gammas,
            p: self.p,
            rng: self.rng,
            solver,
            n_updates: self.n_updates,
        }
    }

    /// Redraws every row of the transition matrix.
    ///
    /// Row `i` is drawn from `Dirichlet(alpha[i, :])` by sampling
    /// `Gamma(alpha[i, j], 1)` variates and dividing by their sum. `n` is
    /// accepted for symmetry with batch samplers, but each call performs
    /// exactly one redraw of the full matrix whatever its value.
    ///
    /// If every variate of a row underflows to zero (possible only for very
    /// small priors), the row is set to its posterior mean instead.
    pub fn update(&mut self, n: usize) {
        let dim = self.p.nrows();
        for i in 0..dim {
            let gammas = &self.gammas[i * dim..(i + 1) * dim];
            let mut row = self.p.row_mut(i);
            let mut total = CompensatedSum::new();
            for (slot, gamma) in row.iter_mut().zip(gammas) {
                let g = gamma.sample(&mut self.rng);
                *slot = g;
                total.add(g);
            }
            let total = total.value();
            if total > 0.0 {
                row /= total;
            } else {
                let alpha_row = self.alpha.row(i);
                let alpha_sum = alpha_row.sum();
                row.assign(&alpha_row.mapv(|a| a / alpha_sum));
            }
        }
        self.n_updates += 1;
        trace!(requested = n, draws = self.n_updates, "posterior redraw");
    }

    /// Draws a new transition matrix, optionally with its stationary distribution.
    ///
    /// Calls [`update`](Self::update) with `n`, then, when `return_statdist`
    /// is set, solves for the stationary distribution of the fresh draw.
    /// The distribution is recomputed on every call.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::Stationary`] if the solver fails.
    pub fn sample(&mut self, n: usize, return_statdist: bool) -> Result<Draw<'_>, SamplerError> {
        self.update(n);
        let stationary = if return_statdist {
            Some(self.solver.solve(&self.p)?)
        } else {
            None
        };
        Ok(Draw {
            transition: &self.p,
            stationary,
        })
    }

    /// The current draw.
    pub fn transition_matrix(&self) -> &Array2<f64> {
        &self.p
    }

    /// The count matrix, as a dense copy of the input.
    pub fn counts(&self) -> &Array2<f64> {
        &self.counts
    }

    /// The Dirichlet parameters, `counts + prior`.
    pub fn alpha(&self) -> &Array2<f64> {
        &self.alpha
    }

    /// Number of states.
    pub fn dim(&self) -> usize {
        self.p.nrows()
    }

    /// Number of full redraws so far, the initial one included.
    pub fn n_updates(&self) -> u64 {
        self.n_updates
    }
}
