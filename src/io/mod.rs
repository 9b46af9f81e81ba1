//! Boundary with the outside world: reading stops and writing itineraries.
//!
//! - [`load_locations`] — Text or JSON location files
//! - [`Itinerary`] — Rendered per-driver stop lists and distance summary

mod loader;
mod report;

pub use loader::{load_locations, parse_locations, parse_locations_json};
pub use report::Itinerary;
