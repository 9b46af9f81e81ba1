//! Directed edge between two locations.

use std::sync::Arc;

use super::Location;

/// One leg of a tour: travel from `start` to `destination`.
///
/// The distance is derived from the endpoints on every call and never
/// stored. Endpoints are shared (`Arc`) so rebuilding tours does not copy
/// location strings.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_tworoute::models::{Edge, Location};
///
/// let a = Arc::new(Location::new("A", "", 0.0, 0.0));
/// let b = Arc::new(Location::new("B", "", 0.0, 1.0));
/// let edge = Edge::new(a.clone(), b.clone());
/// assert_eq!(edge.start(), &*a);
/// assert!((edge.distance() - 111_195.0).abs() < 10.0);
/// assert_eq!(edge.reversed().start(), &*b);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    start: Arc<Location>,
    destination: Arc<Location>,
}

impl Edge {
    /// Creates an edge from `start` to `destination`.
    pub fn new(start: Arc<Location>, destination: Arc<Location>) -> Self {
        Self { start, destination }
    }

    /// Where this leg begins.
    pub fn start(&self) -> &Location {
        &self.start
    }

    /// Where this leg ends.
    pub fn destination(&self) -> &Location {
        &self.destination
    }

    /// Shared handle to the start location.
    pub fn start_arc(&self) -> &Arc<Location> {
        &self.start
    }

    /// Shared handle to the destination location.
    pub fn destination_arc(&self) -> &Arc<Location> {
        &self.destination
    }

    /// Replaces the start location.
    pub fn set_start(&mut self, start: Arc<Location>) {
        self.start = start;
    }

    /// Replaces the destination location.
    pub fn set_destination(&mut self, destination: Arc<Location>) {
        self.destination = destination;
    }

    /// Returns the same leg traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            start: Arc::clone(&self.destination),
            destination: Arc::clone(&self.start),
        }
    }

    /// Travel distance in meters.
    pub fn distance(&self) -> f64 {
        self.start.distance_to(&self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(name: &str, lat: f64, lon: f64) -> Arc<Location> {
        Arc::new(Location::new(name, "", lat, lon))
    }

    #[test]
    fn test_edge_equality_by_endpoints() {
        let a = loc("A", 0.0, 0.0);
        let b = loc("B", 0.0, 1.0);
        let e1 = Edge::new(a.clone(), b.clone());
        let e2 = Edge::new(loc("A", 0.0, 0.0), loc("B", 0.0, 1.0));
        assert_eq!(e1, e2);
        assert_ne!(e1, e1.reversed());
    }

    #[test]
    fn test_reversed_distance_equal() {
        let e = Edge::new(loc("A", 41.0, -87.0), loc("B", 42.0, -88.0));
        assert!((e.distance() - e.reversed().distance()).abs() < 1e-9);
    }

    #[test]
    fn test_distance_derived_after_relink() {
        let a = loc("A", 0.0, 0.0);
        let b = loc("B", 0.0, 1.0);
        let mut e = Edge::new(a.clone(), a.clone());
        assert_eq!(e.distance(), 0.0);
        e.set_destination(b);
        assert!(e.distance() > 0.0);
        e.set_start(loc("B2", 0.0, 1.0));
        assert_eq!(e.distance(), 0.0);
    }
}
