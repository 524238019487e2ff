//! Breadth-first state-space exploration.
//!
//! The [`Explorer`] searches the graph of `(state, context)`
//! configurations reachable from a machine's initial configuration,
//! pruning with a caller-supplied [`ConfigFilter`], and records a
//! shortest [`Path`] to every node it finds in a [`StateSpace`].

pub mod error;

mod explorer;
mod filter;
mod path;

pub use error::ExploreError;
pub use explorer::{Explorer, StateSpace};
pub use filter::ConfigFilter;
pub use path::Path;
