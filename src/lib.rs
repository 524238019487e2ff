//! Waypoint: model-based test path generation for state machines
//!
//! Waypoint takes an abstract state machine - states, an integer-counter
//! context, guarded transitions - and computes a minimal set of event
//! sequences that exercise every reachable configuration at least once,
//! staying finite even when context-mutating self-loops would make the
//! raw state space unbounded.
//!
//! The pipeline is "pure core, imperative shell": the explorer, plan
//! builder, and coverage verifier are pure functions over immutable
//! configurations; only the replay harness performs effects, through
//! injected adapters.
//!
//! # Core Concepts
//!
//! - **Configuration**: a `(state, context)` pair - the true node of the
//!   search graph, so context-distinct loops stay distinguishable
//! - **Filter**: a caller-supplied predicate bounding exploration to a
//!   finite subgraph
//! - **Plan**: a target configuration plus a shortest event sequence
//!   reaching it
//! - **Coverage**: proof that executed paths visited every discovered
//!   configuration
//!
//! # Example
//!
//! ```rust
//! use waypoint::builder::MachineBuilder;
//! use waypoint::explore::Explorer;
//! use waypoint::plan;
//!
//! let machine = MachineBuilder::new()
//!     .initial("shopping")
//!     .state("shopping")
//!     .state("cart")
//!     .state("ordered")
//!     .on("shopping", "ADD_TO_CART", "cart")
//!     .on("cart", "PLACE_ORDER", "ordered")
//!     .on("ordered", "CONTINUE_SHOPPING", "shopping")
//!     .build()
//!     .unwrap();
//!
//! let space = Explorer::new().explore(&machine).unwrap();
//! let plans = plan::build(&space);
//!
//! let descriptions: Vec<String> = plans.iter().map(|p| p.description()).collect();
//! assert_eq!(descriptions, vec![
//!     "reaches state 'shopping' via the initial configuration",
//!     "reaches state 'cart' via ADD_TO_CART",
//!     "reaches state 'ordered' via ADD_TO_CART -> PLACE_ORDER",
//! ]);
//! ```

pub mod builder;
pub mod core;
pub mod coverage;
pub mod explore;
pub mod harness;
pub mod plan;

// Re-export commonly used types
pub use crate::builder::{MachineBuilder, TransitionBuilder};
pub use crate::core::{Action, Configuration, Context, Event, Guard, MachineDefinition};
pub use crate::coverage::{CoverageReport, CoverageTracker};
pub use crate::explore::{ConfigFilter, ExploreError, Explorer, Path, StateSpace};
pub use crate::harness::{PlanRunner, RunReport};
pub use crate::plan::Plan;
