//! Run configuration.
//!
//! [`NsgaConfig`] holds every parameter that controls the generational loop.

use crate::error::NsgaError;

/// Configuration for an NSGA-II run.
///
/// # Defaults
///
/// ```
/// use nsga2::NsgaConfig;
///
/// let config = NsgaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.iterations, 250);
/// assert_eq!(config.mutation_rate, 0.3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use nsga2::NsgaConfig;
///
/// let config = NsgaConfig::default()
///     .with_population_size(60)
///     .with_iterations(100)
///     .with_mutation_rate(0.1)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NsgaConfig {
    /// Number of solutions in each generation.
    ///
    /// The merged parent+offspring set transiently holds twice this many.
    pub population_size: usize,

    /// Number of generational replacement cycles after the initial
    /// generation. Zero is valid: the run returns the sorted initial
    /// population.
    pub iterations: usize,

    /// Per-gene probability of Gaussian mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Standard deviation of the zero-mean Gaussian mutation noise.
    pub mutation_std_dev: f64,

    /// BLX-α crossover extension factor (≥ 0).
    ///
    /// Zero samples strictly between the parents; larger values extend the
    /// sampling interval beyond them and raise the chance of a fatal bound
    /// violation when the problem bounds are tight.
    pub crossover_alpha: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed. A fixed seed makes the entire run
    /// deterministic: one shared generator feeds every stochastic step.
    pub seed: Option<u64>,
}

impl Default for NsgaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            iterations: 250,
            mutation_rate: 0.3,
            mutation_std_dev: 0.2,
            crossover_alpha: 0.3,
            seed: None,
        }
    }
}

impl NsgaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generational cycles.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the per-gene mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation noise standard deviation.
    pub fn with_mutation_std_dev(mut self, std_dev: f64) -> Self {
        self.mutation_std_dev = std_dev;
        self
    }

    /// Sets the BLX-α crossover extension factor.
    pub fn with_crossover_alpha(mut self, alpha: f64) -> Self {
        self.crossover_alpha = alpha;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`NsgaError::Config`] describing the first invalid parameter.
    pub fn validate(&self) -> Result<(), NsgaError> {
        if self.population_size == 0 {
            return Err(NsgaError::Config("population_size must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(NsgaError::Config(
                "mutation_rate must lie within [0, 1]".into(),
            ));
        }
        if !(self.mutation_std_dev > 0.0) || !self.mutation_std_dev.is_finite() {
            return Err(NsgaError::Config(
                "mutation_std_dev must be positive and finite".into(),
            ));
        }
        if !(self.crossover_alpha >= 0.0) || !self.crossover_alpha.is_finite() {
            return Err(NsgaError::Config(
                "crossover_alpha must be non-negative and finite".into(),
            ));
        }
        Ok(())
    }
}
