//! Two-driver route chromosome.
//!
//! A candidate holds one closed tour per driver, each an ordered sequence
//! of [`Edge`]s that leaves the depot, visits that driver's stops and
//! returns. Together the two tours visit every stop of the instance exactly
//! once.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::models::{DeliveryInstance, Edge, Location};

/// Shortest tour (in edges) that has an interior edge which can be reversed
/// without touching the two depot-anchored edges at either end.
pub const MIN_MUTABLE_EDGES: usize = 5;

/// Selects one of the two tours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    First,
    Second,
}

impl Driver {
    pub const BOTH: [Driver; 2] = [Driver::First, Driver::Second];

    /// 1-based driver number for display.
    pub fn number(self) -> usize {
        match self {
            Driver::First => 1,
            Driver::Second => 2,
        }
    }
}

/// A candidate solution: two depot-anchored tours covering every stop.
///
/// Fitness is the negated total distance in meters, so larger is better
/// and every value is at most zero.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_tworoute::models::{DeliveryInstance, Location};
/// use u_tworoute::routes::{Driver, Routes};
///
/// let instance = DeliveryInstance::new(
///     Location::new("Depot", "", 0.0, 0.0),
///     vec![
///         Location::new("A", "", 0.0, 0.01),
///         Location::new("B", "", 0.01, 0.0),
///         Location::new("C", "", 0.0, -0.01),
///     ],
/// )
/// .unwrap();
/// let stops = instance.stops();
/// let routes = Routes::from_stops(
///     instance.depot(),
///     &[Arc::clone(&stops[0]), Arc::clone(&stops[1])],
///     &[Arc::clone(&stops[2])],
/// );
///
/// assert_eq!(routes.tour(Driver::First).len(), 3);
/// assert_eq!(routes.tour(Driver::Second).len(), 2);
/// assert!(routes.validate(&instance).is_ok());
/// assert!((routes.fitness() + routes.total_distance()).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Routes {
    pub(super) driver1: Vec<Edge>,
    pub(super) driver2: Vec<Edge>,
}

impl Routes {
    /// Wraps two edge sequences as-is. Use [`validate`](Self::validate) to
    /// check them against an instance.
    pub fn from_edges(driver1: Vec<Edge>, driver2: Vec<Edge>) -> Self {
        Self { driver1, driver2 }
    }

    /// Builds both tours from ordered stop lists:
    /// depot → first stop → … → last stop → depot.
    pub fn from_stops(
        depot: &Arc<Location>,
        driver1: &[Arc<Location>],
        driver2: &[Arc<Location>],
    ) -> Self {
        Self {
            driver1: edges_from(depot, driver1),
            driver2: edges_from(depot, driver2),
        }
    }

    /// The edge sequence of one driver.
    pub fn tour(&self, driver: Driver) -> &[Edge] {
        match driver {
            Driver::First => &self.driver1,
            Driver::Second => &self.driver2,
        }
    }

    fn tour_mut(&mut self, driver: Driver) -> &mut Vec<Edge> {
        match driver {
            Driver::First => &mut self.driver1,
            Driver::Second => &mut self.driver2,
        }
    }

    /// Stops of one driver in visiting order (the final return to the
    /// depot is excluded).
    pub fn stops(&self, driver: Driver) -> impl Iterator<Item = &Location> {
        let tour = self.tour(driver);
        tour[..tour.len().saturating_sub(1)]
            .iter()
            .map(|e| e.destination())
    }

    /// Returns `true` if `driver` delivers to `location`.
    pub fn serves(&self, driver: Driver, location: &Location) -> bool {
        self.tour(driver).iter().any(|e| e.destination() == location)
    }

    /// Distance travelled by one driver, in meters.
    pub fn distance(&self, driver: Driver) -> f64 {
        self.tour(driver).iter().map(Edge::distance).sum()
    }

    /// Combined distance of both drivers, in meters.
    pub fn total_distance(&self) -> f64 {
        self.distance(Driver::First) + self.distance(Driver::Second)
    }

    /// Negated total distance: the value the search maximizes.
    pub fn fitness(&self) -> f64 {
        Driver::BOTH
            .iter()
            .flat_map(|&d| self.tour(d))
            .map(|e| -e.distance())
            .sum()
    }

    /// Checks depot anchoring, contiguity and exact stop coverage.
    pub fn validate(&self, instance: &DeliveryInstance) -> Result<()> {
        let depot = instance.depot().as_ref();
        let mut seen: Vec<&Location> = Vec::with_capacity(instance.num_stops());

        for driver in Driver::BOTH {
            let n = driver.number();
            let tour = self.tour(driver);
            let (Some(first), Some(last)) = (tour.first(), tour.last()) else {
                return Err(Error::invariant(format!("driver {n} has an empty tour")));
            };
            if first.start() != depot {
                return Err(Error::invariant(format!(
                    "driver {n} does not start at the depot"
                )));
            }
            if last.destination() != depot {
                return Err(Error::invariant(format!(
                    "driver {n} does not return to the depot"
                )));
            }
            if tour.len() < 2 {
                return Err(Error::invariant(format!("driver {n} serves no stops")));
            }
            for (i, pair) in tour.windows(2).enumerate() {
                if pair[0].destination() != pair[1].start() {
                    return Err(Error::invariant(format!(
                        "driver {n} tour breaks between edges {i} and {}",
                        i + 1
                    )));
                }
            }

            for stop in self.stops(driver) {
                if !instance.contains_stop(stop) {
                    return Err(Error::invariant(format!(
                        "driver {n} visits unknown location '{}'",
                        stop.name()
                    )));
                }
                if seen.contains(&stop) {
                    return Err(Error::invariant(format!(
                        "location '{}' is visited more than once",
                        stop.name()
                    )));
                }
                seen.push(stop);
            }
        }

        if seen.len() != instance.num_stops() {
            return Err(Error::invariant(format!(
                "{} of {} stops are visited",
                seen.len(),
                instance.num_stops()
            )));
        }
        Ok(())
    }

    /// Reverses the edge at `index` in place and relinks its neighbours so
    /// the tour stays contiguous. This swaps the visiting order of the two
    /// stops joined by that edge.
    ///
    /// `index` must lie in `[2, len - 3]`, which keeps the first and last
    /// edges anchored to the depot.
    pub fn reverse_edge(&mut self, driver: Driver, index: usize) -> Result<()> {
        let tour = self.tour_mut(driver);
        let len = tour.len();
        if len < MIN_MUTABLE_EDGES || index < 2 || index > len - 3 {
            return Err(Error::invariant(format!(
                "edge index {index} outside the reversible range of a {len}-edge tour for driver {}",
                driver.number()
            )));
        }

        tour[index] = tour[index].reversed();
        let new_start = Arc::clone(tour[index].start_arc());
        let new_destination = Arc::clone(tour[index].destination_arc());
        tour[index - 1].set_destination(new_start);
        tour[index + 1].set_start(new_destination);
        Ok(())
    }
}

/// depot → stops[0] → … → stops[n-1] → depot. An empty stop list yields a
/// single depot → depot edge.
fn edges_from(depot: &Arc<Location>, stops: &[Arc<Location>]) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(stops.len() + 1);
    let mut current = Arc::clone(depot);
    for stop in stops {
        edges.push(Edge::new(current, Arc::clone(stop)));
        current = Arc::clone(stop);
    }
    edges.push(Edge::new(current, Arc::clone(depot)));
    edges
}
