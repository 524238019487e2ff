//! Machine definitions and the pure execution engine.

use super::action::Action;
use super::config::Configuration;
use super::context::Context;
use super::event::Event;
use super::guard::Guard;
use std::collections::BTreeMap;

/// What happens when an event fires in a given state: where to go,
/// whether it applies, and how the context changes.
#[derive(Clone, Debug)]
pub struct TransitionRule {
    /// State the machine moves to when this rule applies.
    pub target: String,
    /// Optional pre-condition over the context. Absent means always applies.
    pub guard: Option<Guard>,
    /// Optional context update. Absent means the context is carried over.
    pub action: Option<Action>,
}

impl TransitionRule {
    /// A plain rule: no guard, no action.
    pub fn to(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            guard: None,
            action: None,
        }
    }
}

/// Static description of a state machine: initial state, initial context,
/// and per-state event -> rule tables.
///
/// A `MachineDefinition` can only be obtained through
/// [`MachineBuilder`](crate::builder::MachineBuilder), which validates the
/// model (initial state declared, every rule target declared) before
/// handing one out - exploration never sees a malformed machine.
///
/// The definition doubles as the execution engine via [`step`](Self::step),
/// a pure function the explorer calls to expand the configuration graph.
#[derive(Clone, Debug)]
pub struct MachineDefinition {
    pub(crate) initial: String,
    pub(crate) context: Context,
    pub(crate) states: BTreeMap<String, BTreeMap<Event, TransitionRule>>,
    /// Union of declared event names, in declaration order. Drives the
    /// explorer's deterministic candidate iteration.
    pub(crate) events: Vec<Event>,
}

impl MachineDefinition {
    /// The configuration the machine starts in.
    pub fn initial_configuration(&self) -> Configuration {
        Configuration::new(self.initial.clone(), self.context.clone())
    }

    /// Declared state names, in sorted order.
    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(|s| s.as_str())
    }

    /// All event names appearing in any rule, in declaration order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The rule for `(state, event)`, if one is declared.
    pub fn rule(&self, state: &str, event: &Event) -> Option<&TransitionRule> {
        self.states.get(state)?.get(event)
    }

    /// Apply `event` to `configuration`, producing the next configuration.
    ///
    /// If no rule matches the current state and event, or a matching
    /// rule's guard is false, the configuration is returned unchanged:
    /// unmatched events are defined behavior, not errors. Otherwise the
    /// rule's action (if any) computes the next context and the result is
    /// `(rule.target, next context)`.
    ///
    /// Pure and deterministic for fixed inputs, which is what makes the
    /// explorer's visited-set memoization sound.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waypoint::builder::MachineBuilder;
    /// use waypoint::core::{Context, Event};
    ///
    /// let machine = MachineBuilder::new()
    ///     .initial("shopping")
    ///     .state("shopping")
    ///     .state("cart")
    ///     .on("shopping", "ADD_TO_CART", "cart")
    ///     .build()
    ///     .unwrap();
    ///
    /// let start = machine.initial_configuration();
    /// let next = machine.step(&start, &Event::new("ADD_TO_CART"));
    /// assert_eq!(next.state(), "cart");
    ///
    /// // Unmatched events are no-ops.
    /// let same = machine.step(&start, &Event::new("PLACE_ORDER"));
    /// assert_eq!(same, start);
    /// ```
    pub fn step(&self, configuration: &Configuration, event: &Event) -> Configuration {
        let Some(rule) = self.rule(configuration.state(), event) else {
            return configuration.clone();
        };

        if let Some(guard) = &rule.guard {
            if !guard.check(configuration.context()) {
                return configuration.clone();
            }
        }

        let context = match &rule.action {
            Some(action) => action.apply(configuration.context()),
            None => configuration.context().clone(),
        };

        Configuration::new(rule.target.clone(), context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::MachineBuilder;

    fn cart_machine() -> MachineDefinition {
        MachineBuilder::new()
            .initial("shopping")
            .state("shopping")
            .state("cart")
            .state("ordered")
            .on("shopping", "ADD_TO_CART", "cart")
            .on("cart", "PLACE_ORDER", "ordered")
            .on("cart", "CANCEL", "shopping")
            .on("ordered", "CONTINUE_SHOPPING", "shopping")
            .build()
            .unwrap()
    }

    #[test]
    fn step_follows_matching_rule() {
        let machine = cart_machine();
        let start = machine.initial_configuration();

        let cart = machine.step(&start, &Event::new("ADD_TO_CART"));
        assert_eq!(cart.state(), "cart");

        let ordered = machine.step(&cart, &Event::new("PLACE_ORDER"));
        assert_eq!(ordered.state(), "ordered");
    }

    #[test]
    fn unmatched_event_is_a_no_op() {
        let machine = cart_machine();
        let start = machine.initial_configuration();

        let same = machine.step(&start, &Event::new("CONTINUE_SHOPPING"));
        assert_eq!(same, start);
    }

    #[test]
    fn false_guard_is_a_no_op() {
        let machine = MachineBuilder::new()
            .initial("idle")
            .state("idle")
            .state("busy")
            .rule(
                "idle",
                "START",
                TransitionRule {
                    target: "busy".into(),
                    guard: Some(Guard::new(|ctx: &Context| ctx.get("ready") > 0)),
                    action: None,
                },
            )
            .build()
            .unwrap();

        let start = machine.initial_configuration();
        assert_eq!(machine.step(&start, &Event::new("START")), start);

        let ready = Configuration::new("idle", Context::new().with("ready", 1));
        assert_eq!(machine.step(&ready, &Event::new("START")).state(), "busy");
    }

    #[test]
    fn action_produces_fresh_context() {
        let machine = MachineBuilder::new()
            .initial("cart")
            .state("cart")
            .state("shopping")
            .rule(
                "cart",
                "CANCEL",
                TransitionRule {
                    target: "shopping".into(),
                    guard: None,
                    action: Some(Action::new(|ctx: &Context| ctx.increment("ordersCanceled"))),
                },
            )
            .build()
            .unwrap();

        let start = machine.initial_configuration();
        let next = machine.step(&start, &Event::new("CANCEL"));

        assert_eq!(next.state(), "shopping");
        assert_eq!(next.context().get("ordersCanceled"), 1);
        assert_eq!(start.context().get("ordersCanceled"), 0);
    }

    #[test]
    fn step_is_deterministic() {
        let machine = cart_machine();
        let start = machine.initial_configuration();
        let event = Event::new("ADD_TO_CART");

        assert_eq!(machine.step(&start, &event), machine.step(&start, &event));
    }

    #[test]
    fn events_preserve_declaration_order() {
        let machine = cart_machine();
        let names: Vec<&str> = machine.events().iter().map(Event::name).collect();
        assert_eq!(
            names,
            vec!["ADD_TO_CART", "PLACE_ORDER", "CANCEL", "CONTINUE_SHOPPING"]
        );
    }
}
