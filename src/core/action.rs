//! Context-updating actions attached to transition rules.

use super::context::Context;
use std::sync::Arc;

/// Pure function from one context to the next.
///
/// Actions are how transitions update context: they receive the current
/// context and produce a fresh one - never mutating in place. Like guards,
/// actions must be deterministic and side-effect free; the execution
/// engine relies on `step` producing the same configuration for the same
/// inputs every time.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{Action, Context};
///
/// let complete = Action::new(|ctx: &Context| ctx.increment("ordersCompleted"));
///
/// let next = complete.apply(&Context::new());
/// assert_eq!(next.get("ordersCompleted"), 1);
/// ```
#[derive(Clone)]
pub struct Action {
    update: Arc<dyn Fn(&Context) -> Context + Send + Sync>,
}

impl Action {
    /// Create an action from a pure update function.
    pub fn new<F>(update: F) -> Self
    where
        F: Fn(&Context) -> Context + Send + Sync + 'static,
    {
        Action {
            update: Arc::new(update),
        }
    }

    /// Compute the next context from the current one.
    pub fn apply(&self, context: &Context) -> Context {
        (self.update)(context)
    }
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Action(..)")
    }
}
