//! Multi-objective optimization with NSGA-II.
//!
//! An implementation of the Non-dominated Sorting Genetic Algorithm II for
//! minimization problems over real-valued decision vectors. The algorithm
//! evolves a fixed-size population toward a well-spread approximation of the
//! Pareto-optimal front using:
//!
//! - **Fast non-dominated sorting** (Deb et al., 2002): O(m·n²) Pareto
//!   ranking of the population into fronts
//! - **Crowding distance**: diversity preservation within a front
//! - **Binary tournament selection**: rank first, crowding distance second
//! - **BLX-α crossover** and **Gaussian mutation** on real-valued genes
//! - **Elitist replacement**: parents and offspring compete in a merged
//!   2n population, trimmed front by front back to n
//!
//! # Core Types
//!
//! - [`Problem`]: Problem definition — decision-variable bounds, objective
//!   functions, optional per-generation observation hook
//! - [`NsgaConfig`]: Algorithm parameters (population size, iterations,
//!   operator rates, seed)
//! - [`NsgaRunner`]: Executes the generational loop
//! - [`NsgaResult`]: Final population plus per-generation history
//! - [`Solution`]: A candidate solution with its objective values,
//!   non-domination rank, and crowding distance
//!
//! # Example
//!
//! ```
//! use nsga2::{NsgaConfig, NsgaRunner, Problem};
//!
//! // Schaffer's problem N.1: minimize f1(x) = x², f2(x) = (x - 2)²
//! struct Schaffer;
//!
//! impl Problem for Schaffer {
//!     fn lower_bound(&self) -> f64 { -10.0 }
//!     fn upper_bound(&self) -> f64 { 10.0 }
//!     fn variable_count(&self) -> usize { 1 }
//!     fn objective_count(&self) -> usize { 2 }
//!     fn evaluate(&self, genes: &[f64]) -> Vec<f64> {
//!         let x = genes[0];
//!         vec![x * x, (x - 2.0) * (x - 2.0)]
//!     }
//! }
//!
//! let config = NsgaConfig::default()
//!     .with_population_size(40)
//!     .with_iterations(50)
//!     .with_crossover_alpha(0.0)
//!     .with_seed(42);
//!
//! let result = NsgaRunner::run(&Schaffer, &config).expect("run failed");
//! assert_eq!(result.population.len(), 40);
//! ```
//!
//! # References
//!
//! - Deb, Pratap, Agarwal, Meyarivan (2002), *A Fast and Elitist
//!   Multiobjective Genetic Algorithm: NSGA-II*, IEEE Transactions on
//!   Evolutionary Computation, 6(2), 182-197
//! - Eshelman & Schaffer (1993), *Real-Coded Genetic Algorithms and
//!   Interval-Schemata* (BLX-α crossover)

mod config;
mod error;
mod population;
mod problem;
mod runner;
mod solution;

pub mod operators;
pub mod random;

pub use config::NsgaConfig;
pub use error::NsgaError;
pub use population::Population;
pub use problem::Problem;
pub use runner::{NsgaResult, NsgaRunner};
pub use solution::Solution;
