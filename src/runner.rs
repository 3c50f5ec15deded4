//! Generational engine: the NSGA-II main loop.
//!
//! [`NsgaRunner`] orchestrates the complete evolutionary process:
//! random initialization → non-dominated sort → crowding → offspring via
//! tournament selection + BLX-α crossover + Gaussian mutation → elitist
//! merge-and-trim replacement, repeated for a configured number of
//! iterations.

use log::{debug, info};
use rand::Rng;

use crate::config::NsgaConfig;
use crate::error::NsgaError;
use crate::operators::blx_alpha;
use crate::population::Population;
use crate::problem::Problem;
use crate::random::create_rng;
use crate::solution::Solution;

/// Result of an NSGA-II run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NsgaResult {
    /// The final generation, sorted state intact: every solution carries
    /// its genes, objective values, non-domination rank, and crowding
    /// distance.
    pub population: Vec<Solution>,

    /// Snapshot of every generation, for observation and export only.
    /// Entry 0 is the initial population; the algorithm itself never
    /// consumes this.
    pub history: Vec<Vec<Solution>>,

    /// Number of generational replacement cycles executed.
    pub generations: usize,
}

/// Executes the NSGA-II generational loop.
///
/// # Usage
///
/// ```ignore
/// let config = NsgaConfig::default().with_seed(42);
/// let result = NsgaRunner::run(&problem, &config)?;
/// for solution in &result.population {
///     println!("{:?} -> {:?}", solution.genes(), solution.objectives());
/// }
/// ```
pub struct NsgaRunner;

impl NsgaRunner {
    /// Runs the optimization to completion.
    ///
    /// # Errors
    ///
    /// - [`NsgaError::Config`] for an invalid configuration or problem
    ///   definition; the run never starts.
    /// - [`NsgaError::BoundViolation`] when crossover produces a gene
    ///   outside the problem bounds; the run aborts at that point.
    /// - [`NsgaError::CapacityExceeded`] on a population sizing defect.
    ///
    /// A run either completes all configured iterations or aborts with the
    /// first fatal error; there is no partial-success mode.
    pub fn run<P: Problem>(problem: &P, config: &NsgaConfig) -> Result<NsgaResult, NsgaError> {
        config.validate()?;
        validate_problem(problem)?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        info!(
            "starting NSGA-II: population={}, iterations={}, objectives={}",
            config.population_size,
            config.iterations,
            problem.objective_count()
        );

        // Initial generation: random genes, then a sort/crowd pass so the
        // tournament precondition (valid rank and distance) holds before
        // the first offspring round.
        let mut current = random_population(problem, config, &mut rng)?;
        let fronts = current.non_dominated_sort();
        for front in &fronts {
            current.crowding_distance_assignment(front);
        }

        let mut history = vec![current.members().to_vec()];
        problem.on_generation(0, current.members());

        let mut offspring = offspring_population(&current, problem, config, &mut rng)?;

        for generation in 1..=config.iterations {
            // Rt = Pt ∪ Qt
            let mut merged = Population::with_capacity(2 * config.population_size);
            for solution in current.into_members() {
                merged.push(solution)?;
            }
            for solution in offspring.into_members() {
                merged.push(solution)?;
            }

            let fronts = merged.non_dominated_sort();
            for front in &fronts {
                merged.crowding_distance_assignment(front);
            }

            // whole fronts while they fit; the overflowing front is cut by
            // descending crowding distance
            let survivors = select_survivors(&merged, &fronts, config.population_size);

            let mut next = Population::with_capacity(config.population_size);
            let mut pool: Vec<Option<Solution>> =
                merged.into_members().into_iter().map(Some).collect();
            for index in survivors {
                next.push(pool[index].take().expect("survivor indices are unique"))?;
            }
            debug_assert_eq!(next.len(), config.population_size);

            debug!(
                "generation {generation}: {} fronts, first front size {}",
                fronts.len(),
                fronts[0].len()
            );

            history.push(next.members().to_vec());
            problem.on_generation(generation, next.members());

            offspring = offspring_population(&next, problem, config, &mut rng)?;
            current = next;
        }

        info!("completed {} iterations", config.iterations);

        Ok(NsgaResult {
            population: current.into_members(),
            history,
            generations: config.iterations,
        })
    }
}

/// Rejects problem definitions the engine cannot run against.
fn validate_problem<P: Problem>(problem: &P) -> Result<(), NsgaError> {
    if problem.variable_count() == 0 {
        return Err(NsgaError::Config("variable_count must be positive".into()));
    }
    if problem.objective_count() == 0 {
        return Err(NsgaError::Config(
            "problem must define at least one objective".into(),
        ));
    }
    let (lower, upper) = (problem.lower_bound(), problem.upper_bound());
    if !lower.is_finite() || !upper.is_finite() || lower >= upper {
        return Err(NsgaError::Config(format!(
            "invalid variable bounds [{lower}, {upper}]"
        )));
    }
    Ok(())
}

/// Builds the initial population: every gene of every member sampled
/// uniformly within the problem bounds.
fn random_population<P: Problem, R: Rng>(
    problem: &P,
    config: &NsgaConfig,
    rng: &mut R,
) -> Result<Population, NsgaError> {
    let (lower, upper) = (problem.lower_bound(), problem.upper_bound());
    let mut population = Population::with_capacity(config.population_size);
    for _ in 0..config.population_size {
        let genes: Vec<f64> = (0..problem.variable_count())
            .map(|_| rng.random_range(lower..upper))
            .collect();
        population.push(Solution::from_genes(genes, problem))?;
    }
    Ok(population)
}

/// One full round of selection + crossover + mutation.
///
/// The parent population must have been through a sort/crowd pass.
fn offspring_population<P: Problem, R: Rng>(
    parents: &Population,
    problem: &P,
    config: &NsgaConfig,
    rng: &mut R,
) -> Result<Population, NsgaError> {
    let mut offspring = Population::with_capacity(config.population_size);
    for _ in 0..config.population_size {
        let parent1 = parents.binary_tournament(rng);
        let parent2 = parents.binary_tournament(rng);

        let mut child = blx_alpha(parent1, parent2, config.crossover_alpha, problem, rng)?;
        child.mutate(config.mutation_rate, config.mutation_std_dev, problem, rng);

        offspring.push(child)?;
    }
    Ok(offspring)
}

/// Picks exactly `target` member indices from the sorted, crowded fronts.
///
/// Whole fronts are taken in rank order while they fit; the first front
/// that would overflow is sorted descending by crowding distance (the
/// stable sort keeps front order on ties) and truncated to fill the
/// remaining slots exactly.
fn select_survivors(population: &Population, fronts: &[Vec<usize>], target: usize) -> Vec<usize> {
    let members = population.members();
    let mut selected = Vec::with_capacity(target);

    for front in fronts {
        if selected.len() + front.len() <= target {
            selected.extend_from_slice(front);
            if selected.len() == target {
                break;
            }
        } else {
            let mut split = front.clone();
            split.sort_by(|&a, &b| {
                members[b]
                    .crowding_distance()
                    .total_cmp(&members[a].crowding_distance())
            });
            split.truncate(target - selected.len());
            selected.extend(split);
            break;
        }
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fonseca–Fleming test problem (FON): 3 variables in [-4, 4],
    /// 2 objectives, Pareto-optimal at x1 = x2 = x3 in [-1/√3, 1/√3].
    struct Fon;

    impl Problem for Fon {
        fn lower_bound(&self) -> f64 {
            -4.0
        }
        fn upper_bound(&self) -> f64 {
            4.0
        }
        fn variable_count(&self) -> usize {
            3
        }
        fn objective_count(&self) -> usize {
            2
        }
        fn evaluate(&self, genes: &[f64]) -> Vec<f64> {
            let k = 1.0 / 3.0_f64.sqrt();
            let f1 = 1.0 - (-genes.iter().map(|x| (x - k) * (x - k)).sum::<f64>()).exp();
            let f2 = 1.0 - (-genes.iter().map(|x| (x + k) * (x + k)).sum::<f64>()).exp();
            vec![f1, f2]
        }
    }

    /// Objectives are the genes themselves; wide bounds.
    struct Identity {
        dim: usize,
    }

    impl Problem for Identity {
        fn lower_bound(&self) -> f64 {
            -1e6
        }
        fn upper_bound(&self) -> f64 {
            1e6
        }
        fn variable_count(&self) -> usize {
            self.dim
        }
        fn objective_count(&self) -> usize {
            self.dim
        }
        fn evaluate(&self, genes: &[f64]) -> Vec<f64> {
            genes.to_vec()
        }
    }

    // alpha 0 keeps offspring strictly between their parents, so a run on
    // a bounded problem can never trip the bound check
    fn test_config() -> NsgaConfig {
        NsgaConfig::default()
            .with_population_size(24)
            .with_iterations(8)
            .with_crossover_alpha(0.0)
            .with_seed(42)
    }

    #[test]
    fn test_population_size_invariant_every_generation() {
        let result = NsgaRunner::run(&Fon, &test_config()).expect("run completes");
        assert_eq!(result.population.len(), 24);
        assert_eq!(result.history.len(), 9); // initial + 8 replacements
        for generation in &result.history {
            assert_eq!(generation.len(), 24);
        }
    }

    #[test]
    fn test_bound_containment_across_run() {
        let result = NsgaRunner::run(&Fon, &test_config()).expect("run completes");
        for generation in &result.history {
            for solution in generation {
                assert!(solution
                    .genes()
                    .iter()
                    .all(|&g| (-4.0..=4.0).contains(&g)));
            }
        }
    }

    #[test]
    fn test_every_member_ranked_and_evaluated() {
        let result = NsgaRunner::run(&Fon, &test_config()).expect("run completes");
        for solution in &result.population {
            assert!(solution.rank().is_some_and(|r| r >= 1));
            assert_eq!(solution.objectives().len(), 2);
        }
    }

    #[test]
    fn test_fixed_seed_reproduces_run() {
        let a = NsgaRunner::run(&Fon, &test_config()).expect("run completes");
        let b = NsgaRunner::run(&Fon, &test_config()).expect("run completes");

        let genes = |r: &NsgaResult| -> Vec<Vec<f64>> {
            r.population.iter().map(|s| s.genes().to_vec()).collect()
        };
        assert_eq!(genes(&a), genes(&b));
    }

    #[test]
    fn test_zero_iterations_returns_initial_generation() {
        let config = test_config().with_iterations(0);
        let result = NsgaRunner::run(&Fon, &config).expect("run completes");
        assert_eq!(result.generations, 0);
        assert_eq!(result.history.len(), 1);
        assert_eq!(result.population.len(), 24);
    }

    #[test]
    fn test_invalid_config_never_starts() {
        let config = test_config().with_population_size(0);
        assert!(matches!(
            NsgaRunner::run(&Fon, &config),
            Err(NsgaError::Config(_))
        ));
    }

    #[test]
    fn test_problem_without_objectives_rejected() {
        struct NoObjectives;
        impl Problem for NoObjectives {
            fn lower_bound(&self) -> f64 {
                0.0
            }
            fn upper_bound(&self) -> f64 {
                1.0
            }
            fn variable_count(&self) -> usize {
                1
            }
            fn objective_count(&self) -> usize {
                0
            }
            fn evaluate(&self, _genes: &[f64]) -> Vec<f64> {
                Vec::new()
            }
        }

        assert!(matches!(
            NsgaRunner::run(&NoObjectives, &test_config()),
            Err(NsgaError::Config(_))
        ));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        struct Inverted;
        impl Problem for Inverted {
            fn lower_bound(&self) -> f64 {
                1.0
            }
            fn upper_bound(&self) -> f64 {
                -1.0
            }
            fn variable_count(&self) -> usize {
                1
            }
            fn objective_count(&self) -> usize {
                1
            }
            fn evaluate(&self, genes: &[f64]) -> Vec<f64> {
                genes.to_vec()
            }
        }

        assert!(matches!(
            NsgaRunner::run(&Inverted, &test_config()),
            Err(NsgaError::Config(_))
        ));
    }

    #[test]
    fn test_bound_violation_aborts_run() {
        // tight bounds with a huge alpha make an out-of-bounds offspring
        // all but certain on the very first offspring round
        struct Tight;
        impl Problem for Tight {
            fn lower_bound(&self) -> f64 {
                0.0
            }
            fn upper_bound(&self) -> f64 {
                1.0
            }
            fn variable_count(&self) -> usize {
                4
            }
            fn objective_count(&self) -> usize {
                2
            }
            fn evaluate(&self, genes: &[f64]) -> Vec<f64> {
                vec![genes.iter().sum(), -genes.iter().sum::<f64>()]
            }
        }

        let config = NsgaConfig::default()
            .with_population_size(20)
            .with_iterations(5)
            .with_crossover_alpha(50.0)
            .with_seed(42);

        assert!(matches!(
            NsgaRunner::run(&Tight, &config),
            Err(NsgaError::BoundViolation { .. })
        ));
    }

    #[test]
    fn test_on_generation_called_per_generation() {
        use std::cell::RefCell;

        struct Observed {
            inner: Identity,
            generations: RefCell<Vec<usize>>,
        }
        impl Problem for Observed {
            fn lower_bound(&self) -> f64 {
                self.inner.lower_bound()
            }
            fn upper_bound(&self) -> f64 {
                self.inner.upper_bound()
            }
            fn variable_count(&self) -> usize {
                self.inner.variable_count()
            }
            fn objective_count(&self) -> usize {
                self.inner.objective_count()
            }
            fn evaluate(&self, genes: &[f64]) -> Vec<f64> {
                self.inner.evaluate(genes)
            }
            fn on_generation(&self, generation: usize, population: &[Solution]) {
                assert!(!population.is_empty());
                self.generations.borrow_mut().push(generation);
            }
        }

        let problem = Observed {
            inner: Identity { dim: 2 },
            generations: RefCell::new(Vec::new()),
        };
        let config = test_config().with_iterations(3);
        NsgaRunner::run(&problem, &config).expect("run completes");

        assert_eq!(*problem.generations.borrow(), vec![0, 1, 2, 3]);
    }

    // ---- Survivor selection ----

    fn identity_population(rows: &[Vec<f64>]) -> Population {
        let problem = Identity { dim: rows[0].len() };
        let mut pop = Population::with_capacity(rows.len());
        for row in rows {
            pop.push(Solution::from_genes(row.clone(), &problem))
                .expect("sized to fit");
        }
        pop
    }

    #[test]
    fn test_split_front_filled_by_crowding_distance() {
        // front 1: members 0, 1 (mutually non-dominated)
        // front 2: members 2, 3, 4 — member 4 is the interior point and
        // must be the one dropped when only 2 slots remain
        let mut merged = identity_population(&[
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![2.0, 3.0],
            vec![3.0, 2.0],
            vec![2.5, 2.5],
        ]);
        let fronts = merged.non_dominated_sort();
        assert_eq!(fronts[0], vec![0, 1]);
        assert_eq!(fronts[1], vec![2, 3, 4]);
        for front in &fronts {
            merged.crowding_distance_assignment(front);
        }

        let mut survivors = select_survivors(&merged, &fronts, 4);
        survivors.sort_unstable();
        assert_eq!(survivors, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_whole_fronts_taken_when_they_fit_exactly() {
        let mut merged = identity_population(&[
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![2.0, 3.0],
            vec![3.0, 2.0],
        ]);
        let fronts = merged.non_dominated_sort();
        for front in &fronts {
            merged.crowding_distance_assignment(front);
        }

        let survivors = select_survivors(&merged, &fronts, 4);
        assert_eq!(survivors.len(), 4);
        assert_eq!(survivors, vec![0, 1, 2, 3]);
    }
}
