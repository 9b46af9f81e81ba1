//! Mutation and crossover for two-driver routes.
//!
//! # Mutation
//!
//! Each driver's tour receives [`MUTATION_STEPS`] edge reversals at random
//! interior positions. Reversing edge `i` and relinking edges `i-1` and
//! `i+1` swaps two consecutive stops, a local 2-opt move that keeps the
//! depot anchors and the driver's stop set intact.
//!
//! # Crossover
//!
//! Stops that both parents give to the same driver stay with that driver
//! in every child. The remaining ("contested") stops are assigned by coin
//! flip. Each child's stop lists are turned back into tours in instance
//! order, agreed stops first.

use std::sync::Arc;

use rand::Rng;

use super::chromosome::{Driver, Routes, MIN_MUTABLE_EDGES};
use crate::error::Result;
use crate::models::{DeliveryInstance, Location};

/// Edge reversals applied to each tour per mutation.
pub const MUTATION_STEPS: usize = 12;

/// How contested stops are split between the two children of a crossover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CrossoverMode {
    /// Each child flips its own coin per contested stop, so the children
    /// are two independent random splits.
    #[default]
    Independent,
    /// One coin per contested stop: the children receive mirror-image
    /// assignments of the contested set.
    Complementary,
}

impl Routes {
    /// Perturbs both tours in place.
    ///
    /// A tour shorter than [`MIN_MUTABLE_EDGES`] has no interior edge that
    /// can be reversed and is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use u_tworoute::models::{DeliveryInstance, Location};
    /// use u_tworoute::routes::Routes;
    ///
    /// let stops = (1..=10)
    ///     .map(|i| Location::new(format!("S{i}"), "", 0.01 * i as f64, 0.0))
    ///     .collect();
    /// let instance =
    ///     DeliveryInstance::new(Location::new("Depot", "", 0.0, 0.0), stops).unwrap();
    /// let mut rng = StdRng::seed_from_u64(1);
    ///
    /// let mut routes = Routes::planned_instance(&instance);
    /// routes.mutate(&mut rng).unwrap();
    /// assert!(routes.validate(&instance).is_ok());
    /// ```
    pub fn mutate<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        for driver in Driver::BOTH {
            let len = self.tour(driver).len();
            if len < MIN_MUTABLE_EDGES {
                tracing::trace!(
                    driver = driver.number(),
                    edges = len,
                    "tour too short to mutate"
                );
                continue;
            }
            for _ in 0..MUTATION_STEPS {
                let index = rng.random_range(2..=len - 3);
                self.reverse_edge(driver, index)?;
            }
        }
        Ok(())
    }

    /// Recombines two parents into two children.
    pub fn cross<R: Rng>(
        &self,
        other: &Routes,
        instance: &DeliveryInstance,
        mode: CrossoverMode,
        rng: &mut R,
    ) -> (Routes, Routes) {
        let mut agreed1 = Vec::new();
        let mut agreed2 = Vec::new();
        let mut contested = Vec::new();

        for stop in instance.stops() {
            if self.serves(Driver::First, stop) && other.serves(Driver::First, stop) {
                agreed1.push(Arc::clone(stop));
            } else if self.serves(Driver::Second, stop) && other.serves(Driver::Second, stop) {
                agreed2.push(Arc::clone(stop));
            } else {
                contested.push(Arc::clone(stop));
            }
        }

        let mut child1 = (agreed1.clone(), agreed2.clone());
        let mut child2 = (agreed1, agreed2);

        for stop in contested {
            let to_first = rng.random_bool(0.5);
            let other_to_first = match mode {
                CrossoverMode::Independent => rng.random_bool(0.5),
                CrossoverMode::Complementary => !to_first,
            };
            assign(&mut child1, Arc::clone(&stop), to_first);
            assign(&mut child2, stop, other_to_first);
        }

        let depot = instance.depot();
        (build_child(depot, child1, rng), build_child(depot, child2, rng))
    }
}

type StopSplit = (Vec<Arc<Location>>, Vec<Arc<Location>>);

fn assign(split: &mut StopSplit, stop: Arc<Location>, to_first: bool) {
    if to_first {
        split.0.push(stop);
    } else {
        split.1.push(stop);
    }
}

/// Turns a stop split into tours, first moving one random stop across if a
/// driver would otherwise be left idle.
fn build_child<R: Rng>(depot: &Arc<Location>, split: StopSplit, rng: &mut R) -> Routes {
    let (mut first, mut second) = split;
    if first.is_empty() && !second.is_empty() {
        let i = rng.random_range(0..second.len());
        first.push(second.remove(i));
    } else if second.is_empty() && !first.is_empty() {
        let i = rng.random_range(0..first.len());
        second.push(first.remove(i));
    }
    Routes::from_stops(depot, &first, &second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Mutex;

    fn instance(n: usize) -> DeliveryInstance {
        let depot = Location::new("Depot", "", 41.8851024, -87.6618988);
        let stops = (1..=n)
            .map(|i| {
                let angle = i as f64 * 1.3;
                Location::new(
                    format!("S{i}"),
                    "",
                    41.8851024 + 0.02 * angle.sin(),
                    -87.6618988 + 0.03 * angle.cos(),
                )
            })
            .collect();
        DeliveryInstance::new(depot, stops).expect("valid")
    }

    fn stop_names(routes: &Routes, driver: Driver) -> Vec<String> {
        let mut v: Vec<String> = routes.stops(driver).map(|l| l.name().to_string()).collect();
        v.sort();
        v
    }

    #[test]
    fn test_mutate_keeps_stop_sets() {
        let inst = instance(14);
        let mut rng = StdRng::seed_from_u64(5);
        let original = Routes::shuffled_instance(&inst, &mut rng);
        let mut mutated = original.clone();
        mutated.mutate(&mut rng).expect("long tours");
        assert!(mutated.validate(&inst).is_ok());
        for d in Driver::BOTH {
            assert_eq!(stop_names(&original, d), stop_names(&mutated, d));
            assert_eq!(original.tour(d).len(), mutated.tour(d).len());
        }
    }

    #[test]
    fn test_mutate_changes_order() {
        let inst = instance(14);
        let mut rng = StdRng::seed_from_u64(9);
        let original = Routes::planned_instance(&inst);
        let mut changed = false;
        for _ in 0..10 {
            let mut m = original.clone();
            m.mutate(&mut rng).expect("long tours");
            changed |= m != original;
        }
        assert!(changed);
    }

    /// Log sink shared between a test and its subscriber.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().expect("log buffer").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_mutate_short_tours_untouched() {
        let inst = instance(4);
        let mut rng = StdRng::seed_from_u64(3);
        let original = Routes::planned_instance(&inst);
        let mut m = original.clone();

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, || m.mutate(&mut rng).expect("no-op"));

        assert_eq!(m, original);
        let logs = String::from_utf8(captured.0.lock().expect("log buffer").clone()).expect("utf8");
        assert_eq!(logs.matches("tour too short to mutate").count(), 2);
        assert!(logs.contains("driver=1"));
        assert!(logs.contains("driver=2"));
    }

    #[test]
    fn test_crossover_mode_defaults_to_independent() {
        assert_eq!(CrossoverMode::default(), CrossoverMode::Independent);
        let problem = crate::routes::TwoDriverProblem::new(instance(3));
        assert_eq!(problem.crossover_mode(), CrossoverMode::Independent);
    }

    #[test]
    fn test_cross_children_valid() {
        let inst = instance(12);
        let mut rng = StdRng::seed_from_u64(11);
        for mode in [CrossoverMode::Independent, CrossoverMode::Complementary] {
            for _ in 0..20 {
                let a = Routes::random_instance(&inst, &mut rng);
                let b = Routes::random_instance(&inst, &mut rng);
                let (c1, c2) = a.cross(&b, &inst, mode, &mut rng);
                assert!(c1.validate(&inst).is_ok());
                assert!(c2.validate(&inst).is_ok());
            }
        }
    }

    #[test]
    fn test_cross_keeps_agreed_stops() {
        let inst = instance(8);
        let mut rng = StdRng::seed_from_u64(2);
        let a = Routes::planned_instance(&inst);
        let (c1, c2) = a.cross(&a, &inst, CrossoverMode::Independent, &mut rng);
        // Identical parents agree on every stop.
        for d in Driver::BOTH {
            assert_eq!(stop_names(&c1, d), stop_names(&a, d));
            assert_eq!(stop_names(&c2, d), stop_names(&a, d));
        }
    }

    #[test]
    fn test_cross_complementary_mirrors_contested() {
        let inst = instance(10);
        let stops = inst.stops();
        // Parents disagree on every stop.
        let a = Routes::from_stops(inst.depot(), &stops[..5], &stops[5..]);
        let b = Routes::from_stops(inst.depot(), &stops[5..], &stops[..5]);
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..20 {
            let (c1, c2) = a.cross(&b, &inst, CrossoverMode::Complementary, &mut rng);
            let first1 = stop_names(&c1, Driver::First);
            let second2 = stop_names(&c2, Driver::Second);
            // Rebalancing may move one stop when a child would be idle.
            if first1.len() > 1 && first1.len() < 9 {
                assert_eq!(first1, second2);
            }
        }
    }

    #[test]
    fn test_cross_never_leaves_driver_idle() {
        let inst = instance(2);
        let stops = inst.stops();
        let a = Routes::from_stops(inst.depot(), &stops[..1], &stops[1..]);
        let b = Routes::from_stops(inst.depot(), &stops[1..], &stops[..1]);
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..50 {
            let (c1, c2) = a.cross(&b, &inst, CrossoverMode::Independent, &mut rng);
            assert!(c1.validate(&inst).is_ok());
            assert!(c2.validate(&inst).is_ok());
        }
    }
}
