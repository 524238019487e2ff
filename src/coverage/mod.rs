//! Coverage tracking over the explored state space.
//!
//! After plans run, the tracker answers: did the executed paths visit
//! every configuration the explorer discovered? Incomplete coverage is
//! reported as data, not an error - the caller's final assertion decides
//! whether it fails the run.

use crate::core::Configuration;
use crate::explore::{Path, StateSpace};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Tracks which discovered configurations were actually visited during
/// replay.
///
/// Seeded from the explorer's [`StateSpace`]; a configuration counts as
/// covered once any executed path passes through it, intermediate steps
/// included. Visits to configurations outside the discovered set are
/// ignored - coverage is defined over the explored subgraph only.
///
/// # Example
///
/// ```rust
/// use waypoint::builder::MachineBuilder;
/// use waypoint::coverage::CoverageTracker;
/// use waypoint::explore::Explorer;
///
/// let machine = MachineBuilder::new()
///     .initial("shopping")
///     .state("shopping")
///     .state("cart")
///     .on("shopping", "ADD_TO_CART", "cart")
///     .on("cart", "CHECK_OUT", "shopping")
///     .build()
///     .unwrap();
///
/// let space = Explorer::new().explore(&machine).unwrap();
/// let mut tracker = CoverageTracker::new(&space);
///
/// assert!(!tracker.compute().fully_covered);
///
/// for (config, _) in space.iter() {
///     tracker.record_visit(config);
/// }
/// assert!(tracker.compute().fully_covered);
/// ```
#[derive(Clone, Debug)]
pub struct CoverageTracker {
    discovered: Vec<Configuration>,
    visited: HashSet<String>,
}

impl CoverageTracker {
    /// Seed a tracker with every configuration the explorer discovered.
    pub fn new(space: &StateSpace) -> Self {
        Self {
            discovered: space.configurations().cloned().collect(),
            visited: HashSet::new(),
        }
    }

    /// Mark a configuration as visited.
    pub fn record_visit(&mut self, configuration: &Configuration) {
        self.visited.insert(configuration.canonical_key());
    }

    /// Mark every configuration on a path as visited, the initial one and
    /// all intermediate steps included.
    pub fn record_path(&mut self, path: &Path) {
        for configuration in path.configurations() {
            self.record_visit(configuration);
        }
    }

    /// Compute the coverage report for everything recorded so far.
    pub fn compute(&self) -> CoverageReport {
        let missing: Vec<Configuration> = self
            .discovered
            .iter()
            .filter(|c| !self.visited.contains(&c.canonical_key()))
            .cloned()
            .collect();

        CoverageReport {
            fully_covered: missing.is_empty(),
            missing,
        }
    }
}

/// The outcome of a coverage check.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoverageReport {
    /// True iff every discovered configuration was visited by some
    /// executed path.
    pub fully_covered: bool,
    /// Discovered-but-unvisited configurations, in discovery order.
    pub missing: Vec<Configuration>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::MachineBuilder;
    use crate::core::MachineDefinition;
    use crate::explore::Explorer;

    fn cart_machine() -> MachineDefinition {
        MachineBuilder::new()
            .initial("shopping")
            .state("shopping")
            .state("cart")
            .state("ordered")
            .on("shopping", "ADD_TO_CART", "cart")
            .on("cart", "PLACE_ORDER", "ordered")
            .on("ordered", "CONTINUE_SHOPPING", "shopping")
            .build()
            .unwrap()
    }

    #[test]
    fn fresh_tracker_reports_everything_missing() {
        let space = Explorer::new().explore(&cart_machine()).unwrap();
        let tracker = CoverageTracker::new(&space);

        let report = tracker.compute();
        assert!(!report.fully_covered);
        assert_eq!(report.missing.len(), 3);
    }

    #[test]
    fn visiting_every_configuration_yields_full_coverage() {
        let space = Explorer::new().explore(&cart_machine()).unwrap();
        let mut tracker = CoverageTracker::new(&space);

        for config in space.configurations() {
            tracker.record_visit(config);
        }

        let report = tracker.compute();
        assert!(report.fully_covered);
        assert!(report.missing.is_empty());
    }

    #[test]
    fn record_path_covers_intermediate_configurations() {
        let machine = cart_machine();
        let space = Explorer::new().explore(&machine).unwrap();
        let mut tracker = CoverageTracker::new(&space);

        // The longest shortest path passes through every configuration of
        // this model.
        let ordered = space
            .configurations()
            .find(|c| c.state() == "ordered")
            .unwrap()
            .clone();
        tracker.record_path(space.path_to(&ordered).unwrap());

        assert!(tracker.compute().fully_covered);
    }

    #[test]
    fn missing_reports_exactly_the_unvisited() {
        let space = Explorer::new().explore(&cart_machine()).unwrap();
        let mut tracker = CoverageTracker::new(&space);

        let cart = space
            .configurations()
            .find(|c| c.state() == "cart")
            .unwrap()
            .clone();
        tracker.record_visit(&cart);

        let report = tracker.compute();
        assert!(!report.fully_covered);
        let missing: Vec<&str> = report.missing.iter().map(|c| c.state()).collect();
        assert_eq!(missing, vec!["shopping", "ordered"]);
    }

    #[test]
    fn unknown_visits_are_ignored() {
        let space = Explorer::new().explore(&cart_machine()).unwrap();
        let mut tracker = CoverageTracker::new(&space);

        tracker.record_visit(&Configuration::new(
            "nowhere",
            crate::core::Context::new(),
        ));

        assert_eq!(tracker.compute().missing.len(), 3);
    }
}
