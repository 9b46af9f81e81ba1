//! Two-driver route representation and its genetic operators.
//!
//! - [`Routes`] — Candidate: one depot-anchored tour per driver
//! - [`TwoDriverProblem`] — [`GaProblem`](crate::ga::GaProblem) implementation
//! - [`CrossoverMode`] — Independent or complementary contested-stop split

mod chromosome;
mod construct;
mod operators;
mod problem;

pub use chromosome::{Driver, Routes, MIN_MUTABLE_EDGES};
pub use operators::{CrossoverMode, MUTATION_STEPS};
pub use problem::TwoDriverProblem;
