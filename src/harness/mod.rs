//! Asynchronous replay of plans against a live system under test.
//!
//! Replay is the crate's only suspension point: each event execution and
//! each state assertion is an awaited effect, run strictly in sequence
//! within a path. The system under test is reached exclusively through
//! the injected [`EventAction`] and [`StateCheck`] adapters.

pub mod error;

mod adapters;
mod history;
mod replay;

pub use adapters::{EventAction, StateCheck};
pub use error::{AdapterError, ReplayError};
pub use history::{ReplayHistory, ReplayStep};
pub use replay::{PlanRunner, RunReport};
