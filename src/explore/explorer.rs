//! Breadth-first exploration of the configuration graph.

use crate::core::{Configuration, MachineDefinition};
use crate::explore::error::ExploreError;
use crate::explore::filter::ConfigFilter;
use crate::explore::path::Path;
use std::collections::{HashMap, HashSet, VecDeque};

/// The explorer's result: every configuration reachable under the filter,
/// each paired with a shortest path from the initial configuration.
///
/// Entries are kept in discovery (breadth-first) order, so iteration is
/// deterministic across runs; lookup is by canonical configuration key.
#[derive(Clone, Debug, Default)]
pub struct StateSpace {
    entries: Vec<(Configuration, Path)>,
    index: HashMap<String, usize>,
}

impl StateSpace {
    fn insert(&mut self, configuration: Configuration, path: Path) {
        let key = configuration.canonical_key();
        self.index.insert(key, self.entries.len());
        self.entries.push((configuration, path));
    }

    /// Number of discovered configurations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was discovered (never true after an exploration -
    /// the initial configuration is always present).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `configuration` was discovered.
    pub fn contains(&self, configuration: &Configuration) -> bool {
        self.index.contains_key(&configuration.canonical_key())
    }

    /// The shortest path to `configuration`, if it was discovered.
    pub fn path_to(&self, configuration: &Configuration) -> Option<&Path> {
        let idx = *self.index.get(&configuration.canonical_key())?;
        Some(&self.entries[idx].1)
    }

    /// Iterate `(configuration, shortest path)` entries in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&Configuration, &Path)> {
        self.entries.iter().map(|(c, p)| (c, p))
    }

    /// Iterate discovered configurations in discovery order.
    pub fn configurations(&self) -> impl Iterator<Item = &Configuration> {
        self.entries.iter().map(|(c, _)| c)
    }
}

/// Breadth-first explorer over `(state, context)` configurations.
///
/// Searches the graph whose nodes are configurations - not bare state
/// names - so identical states with different context are distinct nodes.
/// The first path found to each configuration is recorded; breadth-first
/// order makes it a shortest path, with ties broken by discovery order
/// (events iterate in machine declaration order).
///
/// Exploration is exhaustive only within the filtered subgraph: the
/// filter must leave finitely many acceptable configurations or the
/// search will not terminate. [`max_configurations`](Self::max_configurations)
/// converts that caller defect into a fast failure.
///
/// # Example
///
/// ```rust
/// use waypoint::builder::MachineBuilder;
/// use waypoint::explore::Explorer;
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
/// let space = Explorer::new().explore(&machine).unwrap();
/// assert_eq!(space.len(), 3);
/// ```
#[derive(Debug)]
pub struct Explorer {
    filter: ConfigFilter,
    max_configurations: Option<usize>,
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Explorer {
    /// An unfiltered explorer. Finite only if the machine's reachable
    /// context space is finite.
    pub fn new() -> Self {
        Self {
            filter: ConfigFilter::accept_all(),
            max_configurations: None,
        }
    }

    /// Bound expansion with a filter predicate.
    pub fn with_filter(mut self, filter: ConfigFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Bound expansion with a predicate closure.
    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: Fn(&Configuration) -> bool + Send + Sync + 'static,
    {
        self.with_filter(ConfigFilter::new(predicate))
    }

    /// Fail fast once more than `cap` configurations have been recorded,
    /// instead of hanging on a filter that does not bound the space.
    pub fn max_configurations(mut self, cap: usize) -> Self {
        self.max_configurations = Some(cap);
        self
    }

    /// Explore every configuration reachable under the filter, recording a
    /// shortest path to each.
    ///
    /// Breadth-first search: pop the earliest-enqueued `(configuration,
    /// path)`; skip if already visited; otherwise record it and, for every
    /// event the machine knows, compute the candidate successor. Candidates
    /// equal to their source (no-op transitions) or rejected by the filter
    /// are not enqueued - that is what bounds context-mutating loops.
    pub fn explore(&self, machine: &MachineDefinition) -> Result<StateSpace, ExploreError> {
        let mut space = StateSpace::default();
        let mut visited: HashSet<String> = HashSet::new();
        let mut frontier: VecDeque<(Configuration, Path)> = VecDeque::new();

        let initial = machine.initial_configuration();
        frontier.push_back((initial.clone(), Path::empty(initial)));

        while let Some((configuration, path)) = frontier.pop_front() {
            let key = configuration.canonical_key();
            if !visited.insert(key) {
                continue;
            }

            space.insert(configuration.clone(), path.clone());
            if let Some(cap) = self.max_configurations {
                if space.len() > cap {
                    return Err(ExploreError::ConfigurationCapExceeded { cap });
                }
            }

            for event in machine.events() {
                let candidate = machine.step(&configuration, event);
                if candidate == configuration {
                    continue;
                }
                if !self.filter.check(&candidate) {
                    continue;
                }
                if visited.contains(&candidate.canonical_key()) {
                    continue;
                }
                let next_path = path.extended(event.clone(), candidate.clone());
                frontier.push_back((candidate, next_path));
            }
        }

        Ok(space)
    }
}
