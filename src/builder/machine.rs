//! Builder for constructing machine definitions.

use crate::builder::error::{BuildError, ModelViolation};
use crate::builder::transition::{DeclaredTransition, TransitionBuilder};
use crate::core::{Context, Event, MachineDefinition, TransitionRule};
use std::collections::{BTreeMap, HashSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for constructing machine definitions with a fluent API.
///
/// `build()` validates the whole model and accumulates ALL consistency
/// violations instead of stopping at the first one, so a misdeclared
/// machine is reported in a single pass.
///
/// # Example
///
/// ```rust
/// use waypoint::builder::MachineBuilder;
///
/// let machine = MachineBuilder::new()
///     .initial("shopping")
///     .state("shopping")
///     .state("cart")
///     .state("ordered")
///     .on("shopping", "ADD_TO_CART", "cart")
///     .on("cart", "PLACE_ORDER", "ordered")
///     .on("ordered", "CONTINUE_SHOPPING", "shopping")
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.initial_configuration().state(), "shopping");
/// ```
#[derive(Default)]
pub struct MachineBuilder {
    initial: Option<String>,
    context: Context,
    states: Vec<String>,
    transitions: Vec<DeclaredTransition>,
}

impl MachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Set the initial context. Defaults to an empty context.
    pub fn context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    /// Declare a state.
    pub fn state(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.states.contains(&name) {
            self.states.push(name);
        }
        self
    }

    /// Declare a plain transition: no guard, no action.
    pub fn on(
        mut self,
        from: impl Into<String>,
        event: impl Into<Event>,
        target: impl Into<String>,
    ) -> Self {
        self.transitions.push(DeclaredTransition {
            from: from.into(),
            event: event.into(),
            rule: TransitionRule::to(target),
        });
        self
    }

    /// Declare a transition with an explicit rule.
    pub fn rule(
        mut self,
        from: impl Into<String>,
        event: impl Into<Event>,
        rule: TransitionRule,
    ) -> Self {
        self.transitions.push(DeclaredTransition {
            from: from.into(),
            event: event.into(),
            rule,
        });
        self
    }

    /// Declare a transition using a builder.
    /// Returns an error if the builder is missing required fields.
    pub fn transition(mut self, builder: TransitionBuilder) -> Result<Self, BuildError> {
        let declared = builder.build()?;
        self.transitions.push(declared);
        Ok(self)
    }

    /// Build the machine definition.
    ///
    /// Fails fast on missing builder fields; model consistency violations
    /// are accumulated and reported together in
    /// [`BuildError::InvalidModel`].
    pub fn build(self) -> Result<MachineDefinition, BuildError> {
        let initial = self
            .initial
            .clone()
            .ok_or(BuildError::MissingInitialState)?;

        match self.validate(&initial) {
            Validation::Success(_) => {}
            Validation::Failure(errors) => {
                return Err(BuildError::InvalidModel {
                    violations: errors.iter().cloned().collect(),
                });
            }
        }

        let mut states: BTreeMap<String, BTreeMap<Event, TransitionRule>> = self
            .states
            .iter()
            .map(|name| (name.clone(), BTreeMap::new()))
            .collect();

        let mut events: Vec<Event> = Vec::new();
        for declared in self.transitions {
            if !events.contains(&declared.event) {
                events.push(declared.event.clone());
            }
            if let Some(table) = states.get_mut(&declared.from) {
                table.insert(declared.event, declared.rule);
            }
        }

        Ok(MachineDefinition {
            initial,
            context: self.context,
            states,
            events,
        })
    }

    /// Check model consistency, accumulating every violation.
    fn validate(&self, initial: &str) -> Validation<(), NonEmptyVec<ModelViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ModelViolation>>> = Vec::new();

        checks.push(if self.states.is_empty() {
            Validation::fail(ModelViolation::NoStates)
        } else {
            Validation::success(())
        });

        if !self.states.is_empty() && !self.states.iter().any(|s| s == initial) {
            checks.push(Validation::fail(ModelViolation::UndeclaredInitialState {
                initial: initial.to_string(),
            }));
        }

        let mut seen: HashSet<(&str, &Event)> = HashSet::new();
        for declared in &self.transitions {
            if !self.states.iter().any(|s| *s == declared.from) {
                checks.push(Validation::fail(ModelViolation::UnknownSourceState {
                    from: declared.from.clone(),
                    event: declared.event.name().to_string(),
                }));
            }
            if !self.states.iter().any(|s| *s == declared.rule.target) {
                checks.push(Validation::fail(ModelViolation::UnknownTransitionTarget {
                    from: declared.from.clone(),
                    event: declared.event.name().to_string(),
                    target: declared.rule.target.clone(),
                }));
            }
            if !seen.insert((declared.from.as_str(), &declared.event)) {
                checks.push(Validation::fail(ModelViolation::DuplicateTransition {
                    from: declared.from.clone(),
                    event: declared.event.name().to_string(),
                }));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
