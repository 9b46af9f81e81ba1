//! Delivery location type.

use serde::{Deserialize, Serialize};

use crate::distance::haversine;

/// A named delivery location (or the depot) with geographic coordinates.
///
/// Locations are immutable once built and compare by value.
///
/// # Examples
///
/// ```
/// use u_tworoute::models::Location;
///
/// let depot = Location::new("Office", "Lake & Racine", 41.8851024, -87.6618988);
/// let stop = Location::new("Kiosk", "Clark & Lake", 41.8857, -87.6309);
/// assert_eq!(depot.name(), "Office");
/// assert!(depot.distance_to(&stop) > 2_000.0);
/// assert_eq!(depot.distance_to(&depot), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    name: String,
    address: String,
    latitude: f64,
    longitude: f64,
}

impl Location {
    /// Creates a new location.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            latitude,
            longitude,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Street address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns `true` if both coordinates are finite and within
    /// `[-90, 90]` × `[-180, 180]`.
    pub fn has_valid_coordinates(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance to another location, in meters.
    pub fn distance_to(&self, other: &Location) -> f64 {
        haversine(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}
