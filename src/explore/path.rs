//! Paths: event sequences with the configurations they visit.

use crate::core::{Configuration, Event};
use serde::{Deserialize, Serialize};

/// An ordered event sequence together with every configuration it visits.
///
/// A path always holds one more configuration than events: the initial
/// configuration, then the configuration after each event. Paths are
/// immutable values; [`extended`](Self::extended) returns a new path with
/// one more step, the original is unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path {
    events: Vec<Event>,
    configurations: Vec<Configuration>,
}

impl Path {
    /// The empty path sitting at `initial`.
    pub fn empty(initial: Configuration) -> Self {
        Self {
            events: Vec::new(),
            configurations: vec![initial],
        }
    }

    /// Number of events on the path.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the path fires no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The events to fire, in order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Every configuration visited, starting with the initial one.
    /// Always one longer than [`events`](Self::events).
    pub fn configurations(&self) -> &[Configuration] {
        &self.configurations
    }

    /// The configuration the path starts from.
    pub fn initial(&self) -> &Configuration {
        &self.configurations[0]
    }

    /// The configuration the path ends at.
    pub fn target(&self) -> &Configuration {
        self.configurations
            .last()
            .unwrap_or(&self.configurations[0])
    }

    /// Return a new path with `event` fired and `next` reached.
    /// The original path is unchanged.
    pub fn extended(&self, event: Event, next: Configuration) -> Self {
        let mut events = self.events.clone();
        let mut configurations = self.configurations.clone();
        events.push(event);
        configurations.push(next);
        Self {
            events,
            configurations,
        }
    }

    /// Human-readable summary of the event sequence, e.g.
    /// `via ADD_TO_CART -> PLACE_ORDER`.
    pub fn description(&self) -> String {
        if self.events.is_empty() {
            return "via the initial configuration".to_string();
        }
        let events = self
            .events
            .iter()
            .map(Event::name)
            .collect::<Vec<_>>()
            .join(" -> ");
        format!("via {events}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Context;

    fn config(state: &str) -> Configuration {
        Configuration::new(state, Context::new())
    }

    #[test]
    fn empty_path_holds_only_the_initial_configuration() {
        let path = Path::empty(config("shopping"));
        assert!(path.is_empty());
        assert_eq!(path.configurations().len(), 1);
        assert_eq!(path.target(), &config("shopping"));
    }

    #[test]
    fn extended_returns_a_new_path() {
        let path = Path::empty(config("shopping"));
        let longer = path.extended(Event::new("ADD_TO_CART"), config("cart"));

        assert!(path.is_empty());
        assert_eq!(longer.len(), 1);
        assert_eq!(longer.target(), &config("cart"));
        assert_eq!(longer.configurations().len(), 2);
    }

    #[test]
    fn configurations_outnumber_events_by_one() {
        let path = Path::empty(config("shopping"))
            .extended(Event::new("ADD_TO_CART"), config("cart"))
            .extended(Event::new("PLACE_ORDER"), config("ordered"));

        assert_eq!(path.events().len() + 1, path.configurations().len());
    }

    #[test]
    fn description_joins_event_names() {
        let path = Path::empty(config("shopping"))
            .extended(Event::new("ADD_TO_CART"), config("cart"))
            .extended(Event::new("PLACE_ORDER"), config("ordered"));

        assert_eq!(path.description(), "via ADD_TO_CART -> PLACE_ORDER");
    }

    #[test]
    fn empty_path_has_a_description() {
        let path = Path::empty(config("shopping"));
        assert_eq!(path.description(), "via the initial configuration");
    }
}
