//! # u-tworoute
//!
//! Two-driver delivery routing: splits a set of stops into two closed tours
//! that start and end at a shared depot, using a generational genetic
//! algorithm to minimize the combined distance.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, Edge, DeliveryInstance)
//! - [`distance`] — Great-circle distance
//! - [`ga`] — Generic genetic algorithm engine (config, population, runner)
//! - [`routes`] — Two-driver candidate, its operators, and the GA problem
//! - [`io`] — Location file loading and itinerary reports
//!
//! ## Example
//!
//! ```
//! use u_tworoute::ga::GaConfig;
//! use u_tworoute::io::Itinerary;
//! use u_tworoute::models::{DeliveryInstance, Location};
//! use u_tworoute::routes::TwoDriverProblem;
//!
//! let depot = Location::new("Depot", "Lake & Racine", 41.8851024, -87.6618988);
//! let stops = vec![
//!     Location::new("Kiosk 1", "Clark & Lake", 41.8857, -87.6309),
//!     Location::new("Kiosk 2", "State & Madison", 41.8820, -87.6278),
//!     Location::new("Kiosk 3", "Fullerton", 41.9253, -87.6528),
//!     Location::new("Kiosk 4", "Halsted & Roosevelt", 41.8673, -87.6470),
//! ];
//! let instance = DeliveryInstance::new(depot, stops)?;
//! let depot = instance.depot().clone();
//!
//! let config = GaConfig::default().with_max_generations(50).with_seed(1);
//! let result = TwoDriverProblem::new(instance).solve(config)?;
//! let report = Itinerary::new(&result.best, &depot);
//! assert!(report.total_km() > 0.0);
//! # Ok::<(), u_tworoute::Error>(())
//! ```

pub mod distance;
pub mod error;
pub mod ga;
pub mod io;
pub mod models;
pub mod routes;

pub use error::{Error, Result};
