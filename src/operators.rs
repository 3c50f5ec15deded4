//! Recombination operator for real-valued decision vectors.
//!
//! Gaussian mutation lives on [`Solution::mutate`] since it transforms a
//! solution in place; crossover is a pure function producing a new solution
//! from two parents.
//!
//! # References
//!
//! - Eshelman & Schaffer (1993), "Real-Coded Genetic Algorithms and
//!   Interval-Schemata" (BLX-α)
//!
//! [`Solution::mutate`]: crate::Solution::mutate

use rand::Rng;

use crate::error::NsgaError;
use crate::problem::Problem;
use crate::solution::Solution;

/// BLX-α (blend) crossover.
///
/// For each gene index, samples uniformly from the parents' interval
/// `[lo, hi]` extended by `alpha * (hi - lo)` on both sides. The extension
/// lets offspring explore beyond the parents while staying biased toward
/// them; `alpha = 0` reduces to sampling strictly between the parents.
///
/// The parents are untouched; the offspring is evaluated before it is
/// returned and carries no rank or crowding distance yet.
///
/// # Errors
///
/// Returns [`NsgaError::BoundViolation`] if any sampled gene falls outside
/// the problem bounds. The gene is never clamped: an out-of-range offspring
/// means either too-tight bounds or an operator defect, and both must
/// surface.
pub fn blx_alpha<P: Problem + ?Sized, R: Rng>(
    parent1: &Solution,
    parent2: &Solution,
    alpha: f64,
    problem: &P,
    rng: &mut R,
) -> Result<Solution, NsgaError> {
    debug_assert_eq!(parent1.genes().len(), parent2.genes().len());
    let (lower, upper) = (problem.lower_bound(), problem.upper_bound());

    let mut genes = Vec::with_capacity(parent1.genes().len());
    for (index, (&g1, &g2)) in parent1.genes().iter().zip(parent2.genes()).enumerate() {
        let lo = g1.min(g2);
        let hi = g1.max(g2);
        let range = hi - lo;

        let gene = if range > 0.0 {
            rng.random_range((lo - alpha * range)..(hi + alpha * range))
        } else {
            lo // identical parent genes: the interval is a single point
        };

        if gene < lower || gene > upper {
            return Err(NsgaError::BoundViolation {
                index,
                value: gene,
                lower,
                upper,
            });
        }
        genes.push(gene);
    }

    Ok(Solution::from_genes(genes, problem))
}
