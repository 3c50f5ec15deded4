//! The [`Solution`] entity: one point in decision space.
//!
//! A solution owns its decision vector and carries the metadata the
//! algorithm assigns to it: cached objective values, the non-domination
//! rank, and the crowding distance. Domination bookkeeping (domination
//! counts and dominated sets) is rebuilt from scratch on every sort pass
//! and lives in [`Population::non_dominated_sort`], not here.
//!
//! [`Population::non_dominated_sort`]: crate::Population::non_dominated_sort

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::problem::Problem;

/// A candidate solution: a real-valued decision vector plus algorithm state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    genes: Vec<f64>,
    objectives: Vec<f64>,
    rank: Option<usize>,
    crowding_distance: f64,
}

impl Solution {
    /// Creates an evaluated solution from a decision vector.
    ///
    /// Every gene must already lie within the problem bounds; the genetic
    /// operators guarantee this for the vectors they produce.
    pub fn from_genes<P: Problem + ?Sized>(genes: Vec<f64>, problem: &P) -> Self {
        debug_assert_eq!(genes.len(), problem.variable_count());
        debug_assert!(genes
            .iter()
            .all(|&g| g >= problem.lower_bound() && g <= problem.upper_bound()));
        let objectives = problem.evaluate(&genes);
        debug_assert_eq!(objectives.len(), problem.objective_count());
        Self {
            genes,
            objectives,
            rank: None,
            crowding_distance: 0.0,
        }
    }

    /// The decision vector.
    pub fn genes(&self) -> &[f64] {
        &self.genes
    }

    /// Cached objective values, refreshed whenever the genes change.
    pub fn objectives(&self) -> &[f64] {
        &self.objectives
    }

    /// Non-domination rank: 1 is the Pareto front, higher is worse.
    ///
    /// `None` until the containing population has been sorted.
    pub fn rank(&self) -> Option<usize> {
        self.rank
    }

    /// Crowding distance within this solution's front.
    ///
    /// Boundary solutions of a front carry `f64::INFINITY`. Reset and
    /// recomputed on every crowding pass.
    pub fn crowding_distance(&self) -> f64 {
        self.crowding_distance
    }

    pub(crate) fn set_rank(&mut self, rank: usize) {
        self.rank = Some(rank);
    }

    pub(crate) fn set_crowding_distance(&mut self, distance: f64) {
        self.crowding_distance = distance;
    }

    pub(crate) fn add_crowding_distance(&mut self, distance: f64) {
        self.crowding_distance += distance;
    }

    /// Tests Pareto dominance: no worse on every objective and strictly
    /// better on at least one.
    ///
    /// All objectives are minimized, so smaller is better. Solutions that
    /// are equal on every objective do not dominate each other, which makes
    /// the relation irreflexive and asymmetric.
    pub fn dominates(&self, other: &Solution) -> bool {
        debug_assert_eq!(self.objectives.len(), other.objectives.len());
        let mut strictly_better = false;
        for (a, b) in self.objectives.iter().zip(other.objectives.iter()) {
            if a > b {
                return false;
            }
            if a < b {
                strictly_better = true;
            }
        }
        strictly_better
    }

    /// Gaussian mutation: each gene is independently perturbed with
    /// probability `mutation_rate` by zero-mean noise with the given
    /// standard deviation, then clamped into the problem bounds.
    ///
    /// Objective values are re-evaluated when any gene changed.
    pub fn mutate<P: Problem + ?Sized, R: Rng>(
        &mut self,
        mutation_rate: f64,
        std_dev: f64,
        problem: &P,
        rng: &mut R,
    ) {
        let noise = Normal::new(0.0, std_dev).expect("mutation std-dev is validated positive");
        let (lower, upper) = (problem.lower_bound(), problem.upper_bound());

        let mut changed = false;
        for gene in &mut self.genes {
            if rng.random_range(0.0..1.0) < mutation_rate {
                *gene = (*gene + noise.sample(rng)).clamp(lower, upper);
                changed = true;
            }
        }

        if changed {
            self.objectives = problem.evaluate(&self.genes);
        }
    }
}
