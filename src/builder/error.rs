//! Build errors for machine and transition builders.

use thiserror::Error;

/// A single model consistency violation found while building a machine.
///
/// Violations are accumulated - `build()` reports every one it finds, not
/// just the first.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelViolation {
    #[error("Initial state '{initial}' is not declared")]
    UndeclaredInitialState { initial: String },

    #[error("Transition '{from}' on '{event}' targets undeclared state '{target}'")]
    UnknownTransitionTarget {
        from: String,
        event: String,
        target: String,
    },

    #[error("Transition '{from}' on '{event}' is declared from undeclared state '{from}'")]
    UnknownSourceState { from: String, event: String },

    #[error("Duplicate transition for state '{from}' on event '{event}'")]
    DuplicateTransition { from: String, event: String },

    #[error("Machine declares no states")]
    NoStates,
}

/// Errors that can occur when building machines and transitions.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition event not specified. Call .on(event)")]
    MissingEvent,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Invalid machine model: {}", format_violations(.violations))]
    InvalidModel { violations: Vec<ModelViolation> },
}

fn format_violations(violations: &[ModelViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_model_lists_every_violation() {
        let err = BuildError::InvalidModel {
            violations: vec![
                ModelViolation::UndeclaredInitialState {
                    initial: "nowhere".into(),
                },
                ModelViolation::NoStates,
            ],
        };

        let message = err.to_string();
        assert!(message.contains("nowhere"));
        assert!(message.contains("no states"));
    }
}
