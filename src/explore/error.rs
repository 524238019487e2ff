//! Exploration errors.

use thiserror::Error;

/// Errors that can occur during state-space exploration.
#[derive(Debug, Error)]
pub enum ExploreError {
    /// The safety cap on explored configurations was exceeded.
    ///
    /// Exploration is only guaranteed to terminate if the filter bounds
    /// the reachable configuration space; the cap turns an
    /// under-constrained filter into a fast, diagnosable failure instead
    /// of a hang.
    #[error(
        "Explored more than {cap} configurations; the filter does not bound \
         the reachable state space"
    )]
    ConfigurationCapExceeded { cap: usize },
}
