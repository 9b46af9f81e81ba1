//! Domain-agnostic generational genetic algorithm.
//!
//! - [`GaConfig`] — Population size, threshold, generation cap, operator rates
//! - [`GaProblem`] — Capability trait: create, evaluate, crossover, mutate
//! - [`Population`] — Members with a parallel fitness cache
//! - [`GeneticAlgorithm`] — Tournament selection, crossover-or-clone, mutation,
//!   early exit on threshold, best-so-far tracking

mod config;
mod population;
mod problem;
mod runner;

pub use config::GaConfig;
pub use population::Population;
pub use problem::GaProblem;
pub use runner::{CancelToken, GaResult, GeneticAlgorithm, Termination};
