//! Generational genetic algorithm runner.
//!
//! # Generation loop
//!
//! ```text
//! Seeded → Evaluating → ThresholdReached
//!              ↓
//!         Reproducing → Mutating → Evaluating → … → Exhausted
//! ```
//!
//! Each generation evaluates the whole population into the fitness cache,
//! returns immediately if any member reaches the threshold, records the
//! best member seen so far, then breeds the next population by tournament
//! selection and crossover-or-clone, and finally mutates each new member
//! with the configured probability.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use super::{GaConfig, GaProblem, Population};
use crate::error::{Error, Result};

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A candidate reached the fitness threshold.
    ThresholdReached,
    /// The generation cap was hit.
    Exhausted,
    /// The caller's [`CancelToken`] was triggered.
    Cancelled,
}

/// Outcome of a genetic search.
#[derive(Debug, Clone)]
pub struct GaResult<I> {
    /// The returned candidate.
    pub best: I,
    /// Fitness of `best`.
    pub best_fitness: f64,
    /// Number of generations evaluated.
    pub generations: usize,
    /// Stop reason.
    pub termination: Termination,
}

/// Cooperative cancellation flag, checked once per generation boundary.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests that the search stop at the next generation boundary.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Genetic algorithm engine for a single search.
///
/// Owns the problem, the population and one random generator seeded at
/// construction; [`run`](Self::run) consumes the engine.
///
/// # Examples
///
/// ```
/// use u_tworoute::ga::{GaConfig, GeneticAlgorithm, Termination};
/// use u_tworoute::models::{DeliveryInstance, Location};
/// use u_tworoute::routes::TwoDriverProblem;
///
/// let depot = Location::new("Depot", "", 41.88, -87.66);
/// let stops = (1..=6)
///     .map(|i| Location::new(format!("S{i}"), "", 41.88 + 0.01 * i as f64, -87.66))
///     .collect();
/// let instance = DeliveryInstance::new(depot, stops).unwrap();
///
/// let config = GaConfig::default()
///     .with_population_size(10)
///     .with_max_generations(20)
///     .with_fitness_threshold(0.0)
///     .with_seed(42);
/// let engine = GeneticAlgorithm::new(TwoDriverProblem::new(instance), config).unwrap();
/// let result = engine.run().unwrap();
///
/// assert_eq!(result.termination, Termination::Exhausted);
/// assert_eq!(result.generations, 20);
/// assert!(result.best_fitness < 0.0);
/// ```
pub struct GeneticAlgorithm<P: GaProblem> {
    problem: P,
    config: GaConfig,
    population: Population<P::Individual>,
    rng: StdRng,
}

impl<P: GaProblem> GeneticAlgorithm<P> {
    /// Validates `config` and seeds the initial population.
    pub fn new(problem: P, config: GaConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let members = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            problem,
            config,
            population: Population::new(members),
            rng,
        })
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    pub fn population(&self) -> &Population<P::Individual> {
        &self.population
    }

    /// Runs the search to completion.
    pub fn run(self) -> Result<GaResult<P::Individual>> {
        self.run_with_cancel(&CancelToken::new())
    }

    /// Runs the search, stopping early if `cancel` is triggered.
    ///
    /// The token is checked before each generation after the first, so at
    /// least one generation is always evaluated.
    pub fn run_with_cancel(mut self, cancel: &CancelToken) -> Result<GaResult<P::Individual>> {
        let max_generations = self.config.max_generations;
        let threshold = self.config.fitness_threshold;
        info!(
            population_size = self.config.population_size,
            max_generations,
            threshold,
            "starting genetic search"
        );

        let mut best: Option<(P::Individual, f64)> = None;
        let mut generations = 0;
        let mut termination = Termination::Exhausted;

        for generation in 1..=max_generations {
            if generation > 1 && cancel.is_cancelled() {
                warn!(generation, "search cancelled");
                termination = Termination::Cancelled;
                break;
            }
            generations = generation;

            self.evaluate_population();

            if let Some(i) = self.population.first_reaching(threshold) {
                let fitness = self.population.fitness(i);
                info!(generation, fitness, "fitness threshold reached");
                return Ok(GaResult {
                    best: self.population.members()[i].clone(),
                    best_fitness: fitness,
                    generations,
                    termination: Termination::ThresholdReached,
                });
            }

            if let Some(i) = self.population.best_index() {
                let fitness = self.population.fitness(i);
                if best.as_ref().map_or(true, |(_, f)| fitness > *f) {
                    best = Some((self.population.members()[i].clone(), fitness));
                }
            }

            self.population.refresh_fitness_sum();
            debug!(
                generation,
                best_fitness = best.as_ref().map_or(f64::NEG_INFINITY, |(_, f)| *f),
                average_fitness = self.population.average_fitness(),
                "generation evaluated"
            );

            if generation < max_generations {
                self.reproduce()?;
                self.mutate_population()?;
            }
        }

        let (best, best_fitness) =
            best.ok_or_else(|| Error::invariant("search finished without evaluating"))?;
        info!(generations, best_fitness, ?termination, "genetic search finished");
        Ok(GaResult {
            best,
            best_fitness,
            generations,
            termination,
        })
    }

    /// Scores every member into the fitness cache.
    pub fn evaluate_population(&mut self) {
        let problem = &self.problem;
        self.population.evaluate_with(|member| problem.evaluate(member));
    }

    /// Picks `k` members uniformly with replacement and returns the index of
    /// the one with the highest cached fitness (first seen wins ties).
    ///
    /// A tournament at least as large as the population is the whole
    /// population, so the overall best member is returned.
    pub fn tournament(&mut self, k: usize) -> usize {
        let n = self.population.len();
        if k >= n {
            if let Some(best) = self.population.best_index() {
                return best;
            }
        }

        let mut winner = self.rng.random_range(0..n);
        for _ in 1..k {
            let contender = self.rng.random_range(0..n);
            if self.population.fitness(contender) > self.population.fitness(winner) {
                winner = contender;
            }
        }
        winner
    }

    /// Breeds the next population from tournament winners.
    ///
    /// Each pair of winners is replaced by its crossover children with the
    /// configured probability and cloned unchanged otherwise. The result is
    /// truncated to the population size.
    pub fn reproduce(&mut self) -> Result<()> {
        let size = self.config.population_size;
        let k = self.config.tournament_size;
        let mut next = Vec::with_capacity(size + 1);

        while next.len() < size {
            let a = self.tournament(k);
            let b = self.tournament(k);
            let parent1 = &self.population.members()[a];
            let parent2 = &self.population.members()[b];

            if self.rng.random_bool(self.config.crossover_probability) {
                let (child1, child2) = self.problem.crossover(parent1, parent2, &mut self.rng)?;
                next.push(child1);
                next.push(child2);
            } else {
                next.push(parent1.clone());
                next.push(parent2.clone());
            }
        }

        next.truncate(size);
        self.population.replace(next);
        Ok(())
    }

    fn mutate_population(&mut self) -> Result<()> {
        let p = self.config.mutation_probability;
        for member in self.population.members_mut() {
            if self.rng.random_bool(p) {
                self.problem.mutate(member, &mut self.rng)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Individuals are plain numbers; fitness is the number itself.
    struct Numbers {
        start: Vec<f64>,
    }

    impl GaProblem for Numbers {
        type Individual = f64;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> Result<f64> {
            Ok(self.start[rng.random_range(0..self.start.len())])
        }

        fn evaluate(&self, individual: &f64) -> f64 {
            *individual
        }

        fn crossover<R: Rng>(&self, a: &f64, b: &f64, _rng: &mut R) -> Result<(f64, f64)> {
            Ok(((a + b) / 2.0, a.max(*b)))
        }

        fn mutate<R: Rng>(&self, individual: &mut f64, rng: &mut R) -> Result<()> {
            *individual += rng.random_range(-1.0..1.0);
            Ok(())
        }
    }

    /// Far above anything `Numbers` can evolve to within a test run.
    const UNREACHABLE: f64 = 1.0e12;

    fn numbers() -> Numbers {
        Numbers {
            start: vec![-50.0, -40.0, -30.0, -20.0, -10.0],
        }
    }

    #[test]
    fn test_new_rejects_zero_population() {
        let config = GaConfig::default().with_population_size(0);
        assert!(matches!(
            GeneticAlgorithm::new(numbers(), config),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_new_rejects_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert!(GeneticAlgorithm::new(numbers(), config).is_err());
    }

    #[test]
    fn test_new_seeds_population() {
        let config = GaConfig::default().with_population_size(12).with_seed(1);
        let ga = GeneticAlgorithm::new(numbers(), config).expect("valid");
        assert_eq!(ga.population().len(), 12);
        assert!(ga
            .population()
            .fitness_cache()
            .iter()
            .all(|&f| f == f64::NEG_INFINITY));
    }

    #[test]
    fn test_same_seed_same_result() {
        let config = GaConfig::default()
            .with_population_size(8)
            .with_max_generations(15)
            .with_fitness_threshold(UNREACHABLE)
            .with_seed(99);
        let r1 = GeneticAlgorithm::new(numbers(), config.clone())
            .expect("valid")
            .run()
            .expect("run");
        let r2 = GeneticAlgorithm::new(numbers(), config)
            .expect("valid")
            .run()
            .expect("run");
        assert_eq!(r1.best, r2.best);
        assert_eq!(r1.best_fitness, r2.best_fitness);
    }

    #[test]
    fn test_threshold_exit_first_generation() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_fitness_threshold(-100.0)
            .with_seed(3);
        let result = GeneticAlgorithm::new(numbers(), config)
            .expect("valid")
            .run()
            .expect("run");
        assert_eq!(result.termination, Termination::ThresholdReached);
        assert_eq!(result.generations, 1);
        assert!(result.best_fitness >= -100.0);
    }

    #[test]
    fn test_exhausted_runs_all_generations() {
        let config = GaConfig::default()
            .with_population_size(6)
            .with_max_generations(5)
            .with_fitness_threshold(UNREACHABLE)
            .with_seed(5);
        let result = GeneticAlgorithm::new(numbers(), config)
            .expect("valid")
            .run()
            .expect("run");
        assert_eq!(result.termination, Termination::Exhausted);
        assert_eq!(result.generations, 5);
    }

    #[test]
    fn test_best_never_worse_than_initial_best() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(30)
            .with_fitness_threshold(UNREACHABLE)
            .with_seed(11);
        let mut ga = GeneticAlgorithm::new(numbers(), config).expect("valid");
        ga.evaluate_population();
        let initial_best = ga
            .population()
            .best_index()
            .map(|i| ga.population().fitness(i))
            .expect("non-empty");
        let result = ga.run().expect("run");
        assert!(result.best_fitness >= initial_best);
    }

    #[test]
    fn test_tournament_full_size_picks_best() {
        let config = GaConfig::default().with_population_size(10).with_seed(8);
        let mut ga = GeneticAlgorithm::new(numbers(), config).expect("valid");
        ga.evaluate_population();
        let best = ga.population().best_index().expect("non-empty");
        for _ in 0..50 {
            let winner = ga.tournament(10);
            assert_eq!(ga.population().fitness(winner), ga.population().fitness(best));
        }
    }

    #[test]
    fn test_tournament_single_is_uniform_pick() {
        let config = GaConfig::default().with_population_size(5).with_seed(2);
        let mut ga = GeneticAlgorithm::new(numbers(), config).expect("valid");
        ga.evaluate_population();
        for _ in 0..20 {
            assert!(ga.tournament(1) < 5);
        }
    }

    #[test]
    fn test_reproduce_keeps_size() {
        let config = GaConfig::default()
            .with_population_size(7)
            .with_crossover_probability(1.0)
            .with_seed(4);
        let mut ga = GeneticAlgorithm::new(numbers(), config).expect("valid");
        ga.evaluate_population();
        ga.reproduce().expect("reproduce");
        assert_eq!(ga.population().len(), 7);
        assert_eq!(ga.population().fitness(0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_cancel_stops_after_first_generation() {
        let cancel = CancelToken::new();
        cancel.cancel();
        let config = GaConfig::default()
            .with_population_size(5)
            .with_max_generations(100)
            .with_fitness_threshold(UNREACHABLE)
            .with_seed(6);
        let result = GeneticAlgorithm::new(numbers(), config)
            .expect("valid")
            .run_with_cancel(&cancel)
            .expect("run");
        assert_eq!(result.termination, Termination::Cancelled);
        assert_eq!(result.generations, 1);
    }

    #[test]
    fn test_cancel_from_another_thread_mid_run() {
        let max_generations = 50_000_000;
        let config = GaConfig::default()
            .with_population_size(8)
            .with_max_generations(max_generations)
            .with_fitness_threshold(UNREACHABLE)
            .with_seed(12);
        let ga = GeneticAlgorithm::new(numbers(), config).expect("valid");

        let cancel = CancelToken::new();
        let remote = cancel.clone();
        let canceller = std::thread::spawn(move || {
            std::thread::sleep(std::time::Duration::from_millis(50));
            remote.cancel();
        });
        let result = ga.run_with_cancel(&cancel).expect("run");
        canceller.join().expect("canceller thread");

        assert_eq!(result.termination, Termination::Cancelled);
        assert!(result.generations > 1);
        assert!(result.generations < max_generations);
    }

    #[test]
    fn test_cancel_token_shared_between_clones() {
        let a = CancelToken::new();
        let b = a.clone();
        assert!(!b.is_cancelled());
        a.cancel();
        assert!(b.is_cancelled());
    }
}
