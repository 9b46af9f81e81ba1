//! Domain model types for two-driver routing.
//!
//! Provides the core abstractions: geographic locations, directed edges
//! between them, and the validated depot-plus-stops instance a search runs on.

mod edge;
mod instance;
mod location;

pub use edge::Edge;
pub use instance::{DeliveryInstance, MIN_STOPS};
pub use location::Location;
