//! Error taxonomy for the NSGA-II engine.
//!
//! Every failure here is fatal: the algorithm is exact and deterministic
//! given its random source, so a violated invariant indicates a logic or
//! authoring defect, not a transient condition. Errors propagate unchanged
//! to the caller of [`NsgaRunner::run`](crate::NsgaRunner::run); there is no
//! retry and no partial-success mode.

use thiserror::Error;

/// Errors raised by configuration validation and the generational loop.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NsgaError {
    /// Invalid run configuration or problem definition. The run never starts.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A crossover offspring gene fell outside the problem bounds.
    ///
    /// This signals either bounds that are too tight for the chosen
    /// crossover alpha or an algorithmic defect. The gene is never clamped.
    #[error("offspring gene {index} = {value} outside bounds [{lower}, {upper}]")]
    BoundViolation {
        /// Index of the offending gene in the decision vector.
        index: usize,
        /// The sampled gene value.
        value: f64,
        /// Lower variable bound of the problem.
        lower: f64,
        /// Upper variable bound of the problem.
        upper: f64,
    },

    /// An attempt to push a member past a population's fixed capacity.
    ///
    /// Populations are sized exactly once at construction; overflowing one
    /// indicates an engine bug such as building fronts without fencing.
    #[error("population already holds its maximum of {capacity} members")]
    CapacityExceeded {
        /// The fixed capacity of the population.
        capacity: usize,
    },
}
