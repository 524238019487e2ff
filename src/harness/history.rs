//! Immutable record of replayed steps.

use crate::core::{Configuration, Event};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single replayed step: the event fired and the
/// configuration the system was asserted to be in afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReplayStep {
    /// The event that was executed.
    pub event: Event,
    /// The configuration asserted after the event.
    pub configuration: Configuration,
    /// When the step completed.
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of replayed steps.
///
/// Like everything else in the pure core, the history is immutable -
/// `record` returns a new history with the step appended.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ReplayHistory {
    steps: Vec<ReplayStep>,
}

impl ReplayHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Record a step, returning a new history.
    pub fn record(&self, step: ReplayStep) -> Self {
        let mut steps = self.steps.clone();
        steps.push(step);
        Self { steps }
    }

    /// The recorded steps, in execution order.
    pub fn steps(&self) -> &[ReplayStep] {
        &self.steps
    }

    /// The events fired, in execution order.
    pub fn events(&self) -> Vec<&Event> {
        self.steps.iter().map(|s| &s.event).collect()
    }
}
