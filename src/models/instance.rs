//! Validated problem instance: a depot plus the stops to split.

use std::sync::Arc;

use super::Location;
use crate::error::{Error, Result};

/// Minimum number of non-depot stops for a two-driver split to exist.
pub const MIN_STOPS: usize = 2;

/// The depot and the full set of non-depot stops for one search.
///
/// Construction validates the location provider contract: at least
/// [`MIN_STOPS`] stops, valid coordinates everywhere, no duplicate stops and
/// no stop equal to the depot.
///
/// # Examples
///
/// ```
/// use u_tworoute::models::{DeliveryInstance, Location};
///
/// let depot = Location::new("Depot", "", 0.0, 0.0);
/// let stops = vec![
///     Location::new("A", "", 0.0, 0.1),
///     Location::new("B", "", 0.1, 0.0),
/// ];
/// let instance = DeliveryInstance::new(depot, stops).unwrap();
/// assert_eq!(instance.num_stops(), 2);
///
/// let too_few = DeliveryInstance::new(
///     Location::new("Depot", "", 0.0, 0.0),
///     vec![Location::new("A", "", 0.0, 0.1)],
/// );
/// assert!(too_few.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct DeliveryInstance {
    depot: Arc<Location>,
    stops: Vec<Arc<Location>>,
}

impl DeliveryInstance {
    /// Validates and wraps a depot and its stops.
    pub fn new(depot: Location, stops: Vec<Location>) -> Result<Self> {
        if stops.len() < MIN_STOPS {
            return Err(Error::invariant(format!(
                "a two-driver split needs at least {MIN_STOPS} stops, got {}",
                stops.len()
            )));
        }
        if !depot.has_valid_coordinates() {
            return Err(Error::invariant(format!(
                "depot '{}' has invalid coordinates",
                depot.name()
            )));
        }
        for (i, stop) in stops.iter().enumerate() {
            if !stop.has_valid_coordinates() {
                return Err(Error::invariant(format!(
                    "stop '{}' has invalid coordinates",
                    stop.name()
                )));
            }
            if *stop == depot {
                return Err(Error::invariant(format!(
                    "stop '{}' duplicates the depot",
                    stop.name()
                )));
            }
            if stops[..i].contains(stop) {
                return Err(Error::invariant(format!(
                    "stop '{}' appears more than once",
                    stop.name()
                )));
            }
        }

        Ok(Self {
            depot: Arc::new(depot),
            stops: stops.into_iter().map(Arc::new).collect(),
        })
    }

    /// The shared start and end of both tours.
    pub fn depot(&self) -> &Arc<Location> {
        &self.depot
    }

    /// All non-depot stops in provider order.
    pub fn stops(&self) -> &[Arc<Location>] {
        &self.stops
    }

    /// Number of non-depot stops.
    pub fn num_stops(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if `location` is one of the non-depot stops.
    pub fn contains_stop(&self, location: &Location) -> bool {
        self.stops.iter().any(|s| **s == *location)
    }
}
