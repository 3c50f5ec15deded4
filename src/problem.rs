//! Problem definition trait.
//!
//! [`Problem`] is the contract between the generic NSGA-II engine and a
//! concrete multi-objective test problem: decision-variable bounds, the
//! decision vector length, and an ordered set of minimization objectives.

use crate::solution::Solution;

/// A multi-objective minimization problem over a real-valued decision vector.
///
/// All decision variables share the same bounds `[lower_bound, upper_bound]`,
/// and every objective is minimized: a smaller value is always better.
///
/// # Implementing
///
/// ```
/// use nsga2::Problem;
///
/// /// Fonseca–Fleming (FON): three variables, two objectives.
/// struct Fon;
///
/// impl Problem for Fon {
///     fn lower_bound(&self) -> f64 { -4.0 }
///     fn upper_bound(&self) -> f64 { 4.0 }
///     fn variable_count(&self) -> usize { 3 }
///     fn objective_count(&self) -> usize { 2 }
///
///     fn evaluate(&self, genes: &[f64]) -> Vec<f64> {
///         let k = 1.0 / 3.0_f64.sqrt();
///         let f1 = 1.0 - (-genes.iter().map(|x| (x - k) * (x - k)).sum::<f64>()).exp();
///         let f2 = 1.0 - (-genes.iter().map(|x| (x + k) * (x + k)).sum::<f64>()).exp();
///         vec![f1, f2]
///     }
/// }
/// ```
pub trait Problem {
    /// Lower bound applied to every decision variable.
    fn lower_bound(&self) -> f64;

    /// Upper bound applied to every decision variable.
    fn upper_bound(&self) -> f64;

    /// Length of the decision vector.
    fn variable_count(&self) -> usize;

    /// Number of objective functions.
    fn objective_count(&self) -> usize;

    /// Evaluates all objectives for one decision vector.
    ///
    /// The returned vector must have exactly [`objective_count`] entries, in
    /// a stable order, each to be minimized.
    ///
    /// [`objective_count`]: Problem::objective_count
    fn evaluate(&self, genes: &[f64]) -> Vec<f64>;

    /// Called after each generation with the generation index and the
    /// current population.
    ///
    /// Generation `0` is the initial population. Useful for logging, table
    /// output, or export — the engine itself never formats or persists
    /// anything. The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _population: &[Solution]) {}
}
