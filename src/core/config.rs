//! Configurations: the true nodes of the search graph.

use super::context::Context;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `(control state, context)` pair.
///
/// Configurations - not bare state names - are the nodes the explorer
/// searches over: the same state name with different context is a distinct
/// node, which is what lets context-mutating loops terminate under a
/// filter. Two configurations are equal iff the state name and every
/// context field match.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{Configuration, Context};
///
/// let a = Configuration::new("shopping", Context::new().with("ordersCompleted", 0));
/// let b = Configuration::new("shopping", Context::new().with("ordersCompleted", 1));
///
/// assert_ne!(a, b);
/// assert_ne!(a.canonical_key(), b.canonical_key());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Configuration {
    state: String,
    context: Context,
}

impl Configuration {
    /// Create a configuration.
    pub fn new(state: impl Into<String>, context: Context) -> Self {
        Self {
            state: state.into(),
            context,
        }
    }

    /// The control state name.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// The context snapshot.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Deterministic string key identifying this configuration.
    ///
    /// Built from the state name and the context fields in sorted order, so
    /// structurally distinct contexts with equal field values produce the
    /// same key. Used by the explorer's visited set and by the coverage
    /// tracker.
    pub fn canonical_key(&self) -> String {
        let mut key = self.state.clone();
        for (field, value) in self.context.fields() {
            key.push('|');
            key.push_str(field);
            key.push('=');
            key.push_str(&value.to_string());
        }
        key
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.context.is_empty() {
            f.write_str(&self.state)
        } else {
            write!(f, "{} {}", self.state, self.context)
        }
    }
}
