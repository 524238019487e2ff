//! Replay errors.

use crate::core::{Configuration, Event};
use thiserror::Error;

/// Adapter-level failure raised by an event executor or state assertion.
///
/// Adapters report what went wrong at the boundary of the system under
/// test; the runner wraps the failure with path context before surfacing
/// it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AdapterError {
    #[error("event could not be executed: {0}")]
    Event(String),

    #[error("state assertion failed: {0}")]
    Assertion(String),
}

/// Errors that can occur while replaying a path.
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("No executor registered for event '{event}'")]
    MissingExecutor { event: Event },

    #[error("No assertion registered for state '{state}'")]
    MissingAssertion { state: String },

    /// The system under test did not reach the expected configuration.
    ///
    /// Fatal for the path it occurred on: the remaining events are
    /// aborted. `events` is the full sequence fired up to and including
    /// the diverging step; replay is deterministic, so the failure is not
    /// retried.
    #[error(
        "Replay diverged after {} at expected configuration '{expected}': {source}",
        format_events(.events)
    )]
    Diverged {
        events: Vec<Event>,
        expected: Configuration,
        source: AdapterError,
    },
}

fn format_events(events: &[Event]) -> String {
    if events.is_empty() {
        return "the initial configuration".to_string();
    }
    format!(
        "[{}]",
        events
            .iter()
            .map(Event::name)
            .collect::<Vec<_>>()
            .join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Context;

    #[test]
    fn diverged_reports_the_event_sequence() {
        let err = ReplayError::Diverged {
            events: vec![Event::new("ADD_TO_CART"), Event::new("PLACE_ORDER")],
            expected: Configuration::new("ordered", Context::new()),
            source: AdapterError::Assertion("state was 'cart'".into()),
        };

        let message = err.to_string();
        assert!(message.contains("[ADD_TO_CART, PLACE_ORDER]"));
        assert!(message.contains("ordered"));
        assert!(message.contains("state was 'cart'"));
    }

    #[test]
    fn initial_divergence_names_the_initial_configuration() {
        let err = ReplayError::Diverged {
            events: vec![],
            expected: Configuration::new("shopping", Context::new()),
            source: AdapterError::Assertion("blank screen".into()),
        };

        assert!(err.to_string().contains("the initial configuration"));
    }
}
