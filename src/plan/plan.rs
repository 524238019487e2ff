//! Plan types and grouping of explorer results.

use crate::core::Configuration;
use crate::explore::{Path, StateSpace};
use serde::{Deserialize, Serialize};

/// A replay unit: a target configuration and the minimal-length path(s)
/// reaching it from the initial configuration.
///
/// The explorer keeps exactly one shortest path per configuration
/// (first-discovered wins ties), so plans built from a [`StateSpace`]
/// carry a single path each; the `Vec` leaves room for an
/// all-shortest-paths grouping. Event order within a path is fixed and
/// must be replayed in sequence; plans themselves carry no ordering
/// guarantee relative to each other.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Plan {
    target: Configuration,
    paths: Vec<Path>,
}

impl Plan {
    /// The configuration this plan drives the system to.
    pub fn target(&self) -> &Configuration {
        &self.target
    }

    /// The minimal-length paths reaching the target.
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Human-readable summary, e.g.
    /// `reaches state 'ordered' via ADD_TO_CART -> PLACE_ORDER`.
    pub fn description(&self) -> String {
        let via = self
            .paths
            .first()
            .map(Path::description)
            .unwrap_or_default();
        format!("reaches state '{}' {via}", self.target.state())
    }
}

/// Group a [`StateSpace`] into plans, one per discovered configuration,
/// in discovery order.
///
/// # Example
///
/// ```rust
/// use waypoint::builder::MachineBuilder;
/// use waypoint::explore::Explorer;
/// use waypoint::plan;
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
/// let plans = plan::build(&space);
///
/// assert_eq!(plans.len(), 2);
/// assert_eq!(plans[1].description(), "reaches state 'cart' via ADD_TO_CART");
/// ```
pub fn build(space: &StateSpace) -> Vec<Plan> {
    space
        .iter()
        .map(|(configuration, path)| Plan {
            target: configuration.clone(),
            paths: vec![path.clone()],
        })
        .collect()
}
