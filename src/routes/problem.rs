//! GA problem definition for the two-driver split.
//!
//! Implements [`GaProblem`] with [`Routes`] as the individual:
//!
//! - **Creation**: planned or shuffled seed, 50/50
//! - **Evaluation**: negated total distance in meters
//! - **Crossover**: agreed stops kept, contested stops split by coin flip
//! - **Mutation**: 12 interior edge reversals per tour

use rand::Rng;

use super::chromosome::Routes;
use super::operators::CrossoverMode;
use crate::error::Result;
use crate::ga::{CancelToken, GaConfig, GaProblem, GaResult, GeneticAlgorithm};
use crate::models::DeliveryInstance;

/// GA problem for splitting one instance's stops between two drivers.
///
/// # Examples
///
/// ```
/// use u_tworoute::ga::GaConfig;
/// use u_tworoute::models::{DeliveryInstance, Location};
/// use u_tworoute::routes::{CrossoverMode, TwoDriverProblem};
///
/// let stops = (1..=8)
///     .map(|i| Location::new(format!("S{i}"), "", 41.9 + 0.01 * i as f64, -87.6))
///     .collect();
/// let instance =
///     DeliveryInstance::new(Location::new("Depot", "", 41.88, -87.66), stops).unwrap();
///
/// let problem = TwoDriverProblem::new(instance).with_crossover_mode(CrossoverMode::Complementary);
/// let config = GaConfig::default()
///     .with_population_size(16)
///     .with_max_generations(25)
///     .with_seed(3);
/// let result = problem.solve(config).unwrap();
/// assert!(result.best_fitness <= 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct TwoDriverProblem {
    instance: DeliveryInstance,
    crossover_mode: CrossoverMode,
}

impl TwoDriverProblem {
    /// Creates a problem using independent crossover splits.
    pub fn new(instance: DeliveryInstance) -> Self {
        Self {
            instance,
            crossover_mode: CrossoverMode::default(),
        }
    }

    /// Sets how crossover divides contested stops between children.
    pub fn with_crossover_mode(mut self, mode: CrossoverMode) -> Self {
        self.crossover_mode = mode;
        self
    }

    pub fn instance(&self) -> &DeliveryInstance {
        &self.instance
    }

    pub fn crossover_mode(&self) -> CrossoverMode {
        self.crossover_mode
    }

    /// Builds an engine for `config` and runs it to completion.
    pub fn solve(self, config: GaConfig) -> Result<GaResult<Routes>> {
        GeneticAlgorithm::new(self, config)?.run()
    }

    /// Like [`solve`](Self::solve), stopping early when `cancel` fires.
    pub fn solve_with_cancel(
        self,
        config: GaConfig,
        cancel: &CancelToken,
    ) -> Result<GaResult<Routes>> {
        GeneticAlgorithm::new(self, config)?.run_with_cancel(cancel)
    }
}

impl GaProblem for TwoDriverProblem {
    type Individual = Routes;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Result<Routes> {
        let routes = Routes::random_instance(&self.instance, rng);
        debug_assert!(routes.validate(&self.instance).is_ok());
        Ok(routes)
    }

    fn evaluate(&self, individual: &Routes) -> f64 {
        individual.fitness()
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &Routes,
        parent2: &Routes,
        rng: &mut R,
    ) -> Result<(Routes, Routes)> {
        let (child1, child2) = parent1.cross(parent2, &self.instance, self.crossover_mode, rng);
        debug_assert!(child1.validate(&self.instance).is_ok());
        debug_assert!(child2.validate(&self.instance).is_ok());
        Ok((child1, child2))
    }

    fn mutate<R: Rng>(&self, individual: &mut Routes, rng: &mut R) -> Result<()> {
        individual.mutate(rng)?;
        debug_assert!(individual.validate(&self.instance).is_ok());
        Ok(())
    }
}
