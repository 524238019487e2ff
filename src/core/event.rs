//! Named events that drive machine transitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named, payload-less signal fired at a machine.
///
/// Two events are the same event iff their names are equal. Events are
/// cheap value objects; machines key their transition tables by event name
/// and the explorer iterates events in the order they were declared.
///
/// # Example
///
/// ```rust
/// use waypoint::core::Event;
///
/// let add = Event::new("ADD_TO_CART");
/// assert_eq!(add.name(), "ADD_TO_CART");
/// assert_eq!(add, Event::from("ADD_TO_CART"));
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Event(String);

impl Event {
    /// Create an event from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Event(name.into())
    }

    /// The event's name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Event {
    fn from(name: &str) -> Self {
        Event::new(name)
    }
}

impl From<String> for Event {
    fn from(name: String) -> Self {
        Event(name)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
