//! Fixed-capacity population of [`Solution`]s.
//!
//! A population is created empty with a target capacity, filled exactly
//! once (random initialization, merge of two populations, or offspring
//! generation), then read by the sorting, crowding, and selection
//! operations until the next generation replaces it. Capacity is never
//! more than twice the configured population size — the transient merged
//! parent+offspring set.

use std::cmp::Ordering;

use rand::Rng;

use crate::error::NsgaError;
use crate::solution::Solution;

/// An insertion-ordered collection of solutions with a fixed capacity.
#[derive(Debug, Clone)]
pub struct Population {
    members: Vec<Solution>,
    capacity: usize,
}

impl Population {
    /// Creates an empty population that can hold at most `capacity` members.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// The fixed capacity set at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of members currently held.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the population holds no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether the population has reached its capacity.
    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity
    }

    /// The members in insertion order.
    pub fn members(&self) -> &[Solution] {
        &self.members
    }

    /// Consumes the population, yielding its members.
    pub fn into_members(self) -> Vec<Solution> {
        self.members
    }

    /// Adds a member.
    ///
    /// # Errors
    ///
    /// Returns [`NsgaError::CapacityExceeded`] when the population is full.
    /// The capacity fence is an invariant check: overflowing it means the
    /// engine mis-sized a generation, which is fatal.
    pub fn push(&mut self, solution: Solution) -> Result<(), NsgaError> {
        if self.is_full() {
            return Err(NsgaError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.members.push(solution);
        Ok(())
    }

    /// Binary tournament selection on rank and crowding distance.
    ///
    /// Draws two members uniformly at random with replacement. The lower
    /// non-domination rank wins; on a rank tie, the higher crowding
    /// distance (the more diverse solution) wins.
    ///
    /// # Panics
    ///
    /// Panics if the population is empty or has not been through a
    /// non-dominated sort: both competitors need a valid rank.
    pub fn binary_tournament<R: Rng>(&self, rng: &mut R) -> &Solution {
        assert!(!self.members.is_empty(), "cannot select from empty population");

        let a = &self.members[rng.random_range(0..self.members.len())];
        let b = &self.members[rng.random_range(0..self.members.len())];
        let rank_a = a.rank().expect("tournament requires a sorted population");
        let rank_b = b.rank().expect("tournament requires a sorted population");

        if rank_a < rank_b {
            a
        } else if rank_b < rank_a {
            b
        } else if a.crowding_distance() > b.crowding_distance() {
            a
        } else {
            b
        }
    }

    /// Fast non-dominated sort (Deb et al., 2002).
    ///
    /// Partitions the population into Pareto fronts and assigns every
    /// member its non-domination rank as a side effect: front 1 holds the
    /// solutions dominated by nobody, front 2 the solutions dominated only
    /// by front 1, and so on.
    ///
    /// Returns the fronts as lists of member indices. Within a front the
    /// order is the insertion order of discovery during the pairwise scan;
    /// the crowding step re-sorts as needed.
    ///
    /// # Complexity
    ///
    /// O(m·n²) for the pairwise dominance comparisons; front propagation
    /// adds O(n²) worst case across all fronts combined.
    pub fn non_dominated_sort(&mut self) -> Vec<Vec<usize>> {
        let n = self.members.len();
        if n == 0 {
            return Vec::new();
        }

        // Working bookkeeping, rebuilt on every pass:
        // how many solutions dominate each member, and which members each
        // solution dominates.
        let mut domination_count = vec![0usize; n];
        let mut dominated: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut first_front = Vec::new();

        for p in 0..n {
            for q in (p + 1)..n {
                if self.members[p].dominates(&self.members[q]) {
                    dominated[p].push(q);
                    domination_count[q] += 1;
                } else if self.members[q].dominates(&self.members[p]) {
                    dominated[q].push(p);
                    domination_count[p] += 1;
                }
            }
            // every pair involving p has been scanned by now
            if domination_count[p] == 0 {
                self.members[p].set_rank(1);
                first_front.push(p);
            }
        }

        debug_assert!(!first_front.is_empty(), "first front cannot be empty");

        let mut fronts = vec![first_front];
        let mut current = 0;
        while current < fronts.len() {
            let mut next_front = Vec::new();
            for i in 0..fronts[current].len() {
                let p = fronts[current][i];
                for j in 0..dominated[p].len() {
                    let q = dominated[p][j];
                    domination_count[q] -= 1;
                    if domination_count[q] == 0 {
                        self.members[q].set_rank(fronts.len() + 1);
                        next_front.push(q);
                    }
                }
            }
            if next_front.is_empty() {
                break;
            }
            fronts.push(next_front);
            current += 1;
        }

        fronts
    }

    /// Crowding-distance assignment for one front (Deb et al., 2002).
    ///
    /// For each objective the front is sorted ascending; the two boundary
    /// members get `f64::INFINITY` (extreme solutions always survive
    /// selection) and each interior member accumulates the normalized gap
    /// between its neighbours, `(next - prev) / range`. When every member
    /// shares the same value on an objective the range is zero and that
    /// objective contributes nothing — the explicit division-by-zero
    /// policy, not an omission.
    ///
    /// Distances are reset before accumulation; the metric is never
    /// carried over between invocations.
    pub fn crowding_distance_assignment(&mut self, front: &[usize]) {
        if front.is_empty() {
            return;
        }

        for &i in front {
            self.members[i].set_crowding_distance(0.0);
        }

        let objective_count = self.members[front[0]].objectives().len();
        let mut order = front.to_vec();

        for obj in 0..objective_count {
            order.sort_by(|&a, &b| {
                self.members[a].objectives()[obj]
                    .partial_cmp(&self.members[b].objectives()[obj])
                    .unwrap_or(Ordering::Equal)
            });

            let first = order[0];
            let last = order[order.len() - 1];
            self.members[first].set_crowding_distance(f64::INFINITY);
            self.members[last].set_crowding_distance(f64::INFINITY);

            let min_value = self.members[first].objectives()[obj];
            let max_value = self.members[last].objectives()[obj];
            let range = max_value - min_value;
            if range <= 0.0 {
                continue;
            }

            for w in 1..order.len() - 1 {
                let prev = self.members[order[w - 1]].objectives()[obj];
                let next = self.members[order[w + 1]].objectives()[obj];
                // infinity on a boundary member absorbs further contributions
                self.members[order[w]].add_crowding_distance((next - prev) / range);
            }
        }
    }
}
