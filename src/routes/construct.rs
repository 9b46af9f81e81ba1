//! Initial candidate construction.
//!
//! Two strategies seed the population, chosen with equal probability:
//!
//! - **Planned**: stops ordered by distance from the depot so both tours
//!   fan outward from it.
//! - **Shuffled**: stops in uniformly random order.
//!
//! Either ordering is dealt out alternately, one stop to each driver in
//! turn, so both drivers always receive at least one stop.

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use super::chromosome::Routes;
use crate::models::{DeliveryInstance, Location};

impl Routes {
    /// Creates a seed candidate: planned or shuffled with equal probability.
    pub fn random_instance<R: Rng>(instance: &DeliveryInstance, rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Self::planned_instance(instance)
        } else {
            Self::shuffled_instance(instance, rng)
        }
    }

    /// Deterministic seed: stops sorted by descending distance from the
    /// depot and dealt from the nearest end, so each tour moves outward.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tworoute::models::{DeliveryInstance, Location};
    /// use u_tworoute::routes::{Driver, Routes};
    ///
    /// let instance = DeliveryInstance::new(
    ///     Location::new("Depot", "", 0.0, 0.0),
    ///     vec![
    ///         Location::new("Far", "", 0.03, 0.0),
    ///         Location::new("Near", "", 0.01, 0.0),
    ///         Location::new("Mid", "", 0.02, 0.0),
    ///     ],
    /// )
    /// .unwrap();
    /// let routes = Routes::planned_instance(&instance);
    /// let first: Vec<_> = routes.stops(Driver::First).map(|l| l.name()).collect();
    /// let second: Vec<_> = routes.stops(Driver::Second).map(|l| l.name()).collect();
    /// assert_eq!(first, ["Near", "Far"]);
    /// assert_eq!(second, ["Mid"]);
    /// ```
    pub fn planned_instance(instance: &DeliveryInstance) -> Self {
        let depot = instance.depot();
        let mut order: Vec<Arc<Location>> = instance.stops().to_vec();
        order.sort_by(|a, b| b.distance_to(depot).total_cmp(&a.distance_to(depot)));
        deal(depot, order.iter().rev())
    }

    /// Random seed: stops shuffled uniformly, then dealt alternately.
    pub fn shuffled_instance<R: Rng>(instance: &DeliveryInstance, rng: &mut R) -> Self {
        let mut order: Vec<Arc<Location>> = instance.stops().to_vec();
        order.shuffle(rng);
        deal(instance.depot(), order.iter())
    }
}

/// Deals stops alternately to driver 1 and driver 2, keeping their order.
fn deal<'a>(depot: &Arc<Location>, stops: impl Iterator<Item = &'a Arc<Location>>) -> Routes {
    let mut first = Vec::new();
    let mut second = Vec::new();
    for (i, stop) in stops.enumerate() {
        if i % 2 == 0 {
            first.push(Arc::clone(stop));
        } else {
            second.push(Arc::clone(stop));
        }
    }
    Routes::from_stops(depot, &first, &second)
}
