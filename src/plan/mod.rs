//! Plans: replay units grouping shortest paths by target configuration.

mod plan;

pub use plan::{build, Plan};
