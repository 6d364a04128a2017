//! Configuration for the posterior sampler.

use crate::error::SamplerError;

/// Configuration for [`NonReversibleSampler`](crate::NonReversibleSampler).
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use stochmat_sampler::SamplerConfig;
///
/// let config = SamplerConfig::new().with_seed(42);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.prior(), 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct SamplerConfig {
    prior: f64,
    seed: Option<u64>,
}

impl SamplerConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `prior = 1.0` (so `alpha = Z + 1`), `seed = None`.
    pub fn new() -> Self {
        Self {
            prior: 1.0,
            seed: None,
        }
    }

    /// Sets the pseudo-count added to every entry of the count matrix.
    pub fn with_prior(mut self, prior: f64) -> Self {
        self.prior = prior;
        self
    }

    /// Sets the RNG seed. `None` seeds from the operating system.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the prior pseudo-count.
    pub fn prior(&self) -> f64 {
        self.prior
    }

    /// Returns the RNG seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates this configuration.
    ///
    /// The prior must be finite and strictly positive so that every
    /// Dirichlet parameter is positive, including unobserved transitions.
    pub fn validate(&self) -> Result<(), SamplerError> {
        if !self.prior.is_finite() || self.prior <= 0.0 {
            return Err(SamplerError::InvalidPrior { prior: self.prior });
        }
        Ok(())
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self::new()
    }
}
