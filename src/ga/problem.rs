//! Capability trait the genetic engine is generic over.

use rand::Rng;

use crate::error::Result;

/// Defines the operators a genetic search needs from a problem.
///
/// The engine never looks inside an individual; it only creates, scores,
/// recombines and perturbs them through this trait. Higher fitness is
/// better.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_tworoute::ga::GaProblem;
/// use u_tworoute::Result;
///
/// /// Maximize the number of `true` bits.
/// struct OneMax(usize);
///
/// impl GaProblem for OneMax {
///     type Individual = Vec<bool>;
///
///     fn create_individual<R: Rng>(&self, rng: &mut R) -> Result<Vec<bool>> {
///         Ok((0..self.0).map(|_| rng.random_bool(0.5)).collect())
///     }
///
///     fn evaluate(&self, individual: &Vec<bool>) -> f64 {
///         individual.iter().filter(|&&b| b).count() as f64
///     }
///
///     fn crossover<R: Rng>(
///         &self,
///         a: &Vec<bool>,
///         b: &Vec<bool>,
///         rng: &mut R,
///     ) -> Result<(Vec<bool>, Vec<bool>)> {
///         let cut = rng.random_range(0..=self.0);
///         let c1 = a[..cut].iter().chain(&b[cut..]).copied().collect();
///         let c2 = b[..cut].iter().chain(&a[cut..]).copied().collect();
///         Ok((c1, c2))
///     }
///
///     fn mutate<R: Rng>(&self, individual: &mut Vec<bool>, rng: &mut R) -> Result<()> {
///         let i = rng.random_range(0..self.0);
///         individual[i] = !individual[i];
///         Ok(())
///     }
/// }
/// ```
pub trait GaProblem {
    /// The candidate representation.
    type Individual: Clone;

    /// Creates a fresh candidate for the initial population.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Result<Self::Individual>;

    /// Scores a candidate. Must be pure: same candidate, same value.
    fn evaluate(&self, individual: &Self::Individual) -> f64;

    /// Recombines two parents into two children.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        rng: &mut R,
    ) -> Result<(Self::Individual, Self::Individual)>;

    /// Applies a small random perturbation in place.
    fn mutate<R: Rng>(&self, individual: &mut Self::Individual, rng: &mut R) -> Result<()>;
}
