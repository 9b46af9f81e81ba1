//! Distance metrics between geographic locations.
//!
//! Provides the great-circle (haversine) distance used to cost every edge.

mod haversine;

pub use haversine::{haversine, EARTH_RADIUS_M};
