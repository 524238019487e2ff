//! Builder for declaring transitions.

use crate::builder::error::BuildError;
use crate::core::{Action, Context, Event, Guard, TransitionRule};

/// A fully declared transition: source, event, and rule.
#[derive(Clone, Debug)]
pub struct DeclaredTransition {
    pub from: String,
    pub event: Event,
    pub rule: TransitionRule,
}

/// Builder for declaring transitions with a fluent API.
///
/// # Example
///
/// ```rust
/// use waypoint::builder::TransitionBuilder;
/// use waypoint::core::Context;
///
/// let cancel = TransitionBuilder::new()
///     .from("cart")
///     .on("CANCEL")
///     .to("shopping")
///     .update(|ctx: &Context| ctx.increment("ordersCanceled"));
/// ```
#[derive(Default)]
pub struct TransitionBuilder {
    from: Option<String>,
    event: Option<Event>,
    to: Option<String>,
    guard: Option<Guard>,
    action: Option<Action>,
}

impl TransitionBuilder {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source state (required).
    pub fn from(mut self, state: impl Into<String>) -> Self {
        self.from = Some(state.into());
        self
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: impl Into<Event>) -> Self {
        self.event = Some(event.into());
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: impl Into<String>) -> Self {
        self.to = Some(state.into());
        self
    }

    /// Add a guard (optional).
    pub fn guard(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Context) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Add a context-updating action (optional).
    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Add a context-updating action using a closure (optional).
    pub fn update<F>(mut self, update: F) -> Self
    where
        F: Fn(&Context) -> Context + Send + Sync + 'static,
    {
        self.action = Some(Action::new(update));
        self
    }

    /// Build the declared transition.
    pub fn build(self) -> Result<DeclaredTransition, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        let target = self.to.ok_or(BuildError::MissingToState)?;

        Ok(DeclaredTransition {
            from,
            event,
            rule: TransitionRule {
                target,
                guard: self.guard,
                action: self.action,
            },
        })
    }
}
