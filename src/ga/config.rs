//! Genetic algorithm configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Parameters of one genetic search, fixed at engine construction.
///
/// The defaults mirror a typical two-driver run: 30 candidates, stop early
/// once the combined distance drops under 300 km (fitness −300 000 m), and
/// give up after 1000 generations.
///
/// # Examples
///
/// ```
/// use u_tworoute::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_max_generations(200)
///     .with_seed(7);
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.tournament_size, 4);
/// assert!(config.validate().is_ok());
///
/// assert!(GaConfig::default().with_population_size(0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Number of candidates per generation.
    pub population_size: usize,
    /// A candidate whose fitness reaches this value ends the search at once.
    pub fitness_threshold: f64,
    /// Hard cap on generations.
    pub max_generations: usize,
    /// Per-candidate probability of mutation after reproduction.
    pub mutation_probability: f64,
    /// Per-pair probability that selected parents are replaced by children.
    pub crossover_probability: f64,
    /// Number of candidates sampled per tournament.
    pub tournament_size: usize,
    /// Seed for the engine's random generator; `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            fitness_threshold: -300_000.0,
            max_generations: 1000,
            mutation_probability: 0.3,
            crossover_probability: 0.3,
            tournament_size: 4,
            seed: None,
        }
    }
}

impl GaConfig {
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    pub fn with_fitness_threshold(mut self, threshold: f64) -> Self {
        self.fitness_threshold = threshold;
        self
    }

    pub fn with_max_generations(mut self, generations: usize) -> Self {
        self.max_generations = generations;
        self
    }

    pub fn with_mutation_probability(mut self, probability: f64) -> Self {
        self.mutation_probability = probability;
        self
    }

    pub fn with_crossover_probability(mut self, probability: f64) -> Self {
        self.crossover_probability = probability;
        self
    }

    pub fn with_tournament_size(mut self, size: usize) -> Self {
        self.tournament_size = size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks every parameter, returning the first violation found.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(Error::configuration("population_size", "must be positive"));
        }
        if self.max_generations == 0 {
            return Err(Error::configuration("max_generations", "must be positive"));
        }
        if self.tournament_size == 0 {
            return Err(Error::configuration("tournament_size", "must be positive"));
        }
        if !self.fitness_threshold.is_finite() {
            return Err(Error::configuration("fitness_threshold", "must be finite"));
        }
        check_probability("mutation_probability", self.mutation_probability)?;
        check_probability("crossover_probability", self.crossover_probability)?;
        Ok(())
    }
}

fn check_probability(field: &'static str, p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(Error::configuration(
            field,
            format!("must lie in [0, 1], got {p}"),
        ))
    }
}
