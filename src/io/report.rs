//! Plain-text itinerary for a finished search.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::Location;
use crate::routes::{Driver, Routes};

/// Per-driver stop lists plus a distance summary.
///
/// Each driver's list starts with the depot as stop 1 and then numbers
/// every edge destination from 2, so the final entry is the return to the
/// depot. Distances are reported in whole kilometers.
///
/// # Examples
///
/// ```
/// use u_tworoute::io::Itinerary;
/// use u_tworoute::models::{DeliveryInstance, Location};
/// use u_tworoute::routes::{Driver, Routes};
///
/// let instance = DeliveryInstance::new(
///     Location::new("Depot", "HQ", 0.0, 0.0),
///     vec![
///         Location::new("A", "1 A St", 0.0, 0.1),
///         Location::new("B", "2 B St", 0.1, 0.0),
///     ],
/// )
/// .unwrap();
/// let routes = Routes::planned_instance(&instance);
/// let itinerary = Itinerary::new(&routes, instance.depot());
///
/// assert_eq!(itinerary.stop_count(Driver::First), 1);
/// let text = itinerary.to_string();
/// assert!(text.starts_with("*** Driver 1's Route ***"));
/// assert!(text.contains("TOTAL DISTANCE TRAVELED: 44 KM"));
/// ```
#[derive(Debug, Clone)]
pub struct Itinerary {
    depot: Location,
    tours: [Vec<Location>; 2],
    distances_m: [f64; 2],
}

impl Itinerary {
    pub fn new(routes: &Routes, depot: &Location) -> Self {
        let tour = |driver: Driver| -> Vec<Location> {
            routes
                .tour(driver)
                .iter()
                .map(|e| e.destination().clone())
                .collect()
        };
        Self {
            depot: depot.clone(),
            tours: [tour(Driver::First), tour(Driver::Second)],
            distances_m: [
                routes.distance(Driver::First),
                routes.distance(Driver::Second),
            ],
        }
    }

    /// Deliveries made by `driver`, excluding the return to the depot.
    pub fn stop_count(&self, driver: Driver) -> usize {
        self.tours[slot(driver)].len().saturating_sub(1)
    }

    /// Distance of `driver` rounded to whole kilometers.
    pub fn distance_km(&self, driver: Driver) -> f64 {
        to_km(self.distances_m[slot(driver)])
    }

    /// Combined distance rounded to whole kilometers.
    pub fn total_km(&self) -> f64 {
        to_km(self.distances_m.iter().sum())
    }

    /// Writes the rendered itinerary to `path`, replacing any existing file.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_string())?;
        tracing::info!(path = %path.display(), "itinerary written");
        Ok(())
    }
}

fn slot(driver: Driver) -> usize {
    driver.number() - 1
}

fn to_km(meters: f64) -> f64 {
    (meters * 0.001).round()
}

fn write_stop(f: &mut fmt::Formatter<'_>, number: usize, location: &Location) -> fmt::Result {
    writeln!(f, "Stop {number}")?;
    writeln!(f, "{}", location.name())?;
    writeln!(f, "{}", location.address())?;
    writeln!(f, "{}", location.latitude())?;
    writeln!(f, "{}", location.longitude())?;
    writeln!(f)
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for driver in Driver::BOTH {
            writeln!(f, "*** Driver {}'s Route ***", driver.number())?;
            write_stop(f, 1, &self.depot)?;
            for (j, location) in self.tours[slot(driver)].iter().enumerate() {
                write_stop(f, j + 2, location)?;
            }
        }
        for driver in Driver::BOTH {
            writeln!(
                f,
                "DRIVER {} STOPS: {} *** DISTANCE TRAVELED: {} KM",
                driver.number(),
                self.stop_count(driver),
                self.distance_km(driver)
            )?;
        }
        writeln!(f, "TOTAL DISTANCE TRAVELED: {} KM", self.total_km())
    }
}
