//! Filter predicates bounding exploration.

use crate::core::Configuration;
use std::sync::Arc;

/// Caller-supplied acceptance test deciding whether the explorer may
/// expand past a candidate configuration.
///
/// The filter is the mechanism that keeps context-mutating loops finite:
/// it is evaluated on every candidate before enqueuing, so configurations
/// outside the accepted range stop their branch from expanding while the
/// boundary configurations themselves stay reachable.
///
/// A filter must leave only finitely many acceptable configurations, or
/// exploration will not terminate - that precondition is the caller's to
/// uphold (see
/// [`Explorer::max_configurations`](crate::explore::Explorer::max_configurations)
/// for the safety net).
///
/// # Example
///
/// ```rust
/// use waypoint::explore::ConfigFilter;
/// use waypoint::core::{Configuration, Context};
///
/// let filter = ConfigFilter::new(|config: &Configuration| {
///     config.context().get("ordersCompleted") <= 1
/// });
///
/// let inside = Configuration::new("shopping", Context::new().with("ordersCompleted", 1));
/// let outside = Configuration::new("shopping", Context::new().with("ordersCompleted", 2));
///
/// assert!(filter.check(&inside));
/// assert!(!filter.check(&outside));
/// ```
#[derive(Clone)]
pub struct ConfigFilter {
    predicate: Arc<dyn Fn(&Configuration) -> bool + Send + Sync>,
}

impl ConfigFilter {
    /// Create a filter from a pure predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Configuration) -> bool + Send + Sync + 'static,
    {
        ConfigFilter {
            predicate: Arc::new(predicate),
        }
    }

    /// A filter that accepts every configuration.
    ///
    /// Only finite if the machine's reachable context space is finite.
    pub fn accept_all() -> Self {
        ConfigFilter::new(|_| true)
    }

    /// Evaluate the filter against a configuration.
    pub fn check(&self, configuration: &Configuration) -> bool {
        (self.predicate)(configuration)
    }
}

impl std::fmt::Debug for ConfigFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ConfigFilter(..)")
    }
}
