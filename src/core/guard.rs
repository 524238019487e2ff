//! Guard predicates for controlling transitions.
//!
//! Guards are pure boolean functions over the machine context that
//! determine whether a transition rule applies. A false guard makes the
//! triggering event a no-op, not an error.

use super::context::Context;
use std::sync::Arc;

/// Pure predicate over the context that decides if a transition applies.
///
/// Guards encapsulate pre-conditions as pure functions: deterministic, no
/// side effects. The execution engine evaluates the guard before applying
/// a rule; a false guard leaves the configuration unchanged.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{Context, Guard};
///
/// let below_limit = Guard::new(|ctx: &Context| ctx.get("ordersCompleted") < 3);
///
/// assert!(below_limit.check(&Context::new()));
/// assert!(!below_limit.check(&Context::new().with("ordersCompleted", 3)));
/// ```
#[derive(Clone)]
pub struct Guard {
    predicate: Arc<dyn Fn(&Context) -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and side-effect free; the
    /// explorer's memoization is only sound if repeated evaluation over
    /// the same context yields the same answer.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Context) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the guard against a context.
    pub fn check(&self, context: &Context) -> bool {
        (self.predicate)(context)
    }
}

impl std::fmt::Debug for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Guard(..)")
    }
}
