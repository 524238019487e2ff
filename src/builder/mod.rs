//! Fluent builders for machine definitions.
//!
//! [`MachineBuilder`] is the only way to obtain a
//! [`MachineDefinition`](crate::core::MachineDefinition); its `build()`
//! validates the model and accumulates every consistency violation it
//! finds, so exploration never runs against a malformed machine.

pub mod error;
pub mod macros;
pub mod transition;

mod machine;

pub use error::{BuildError, ModelViolation};
pub use machine::MachineBuilder;
pub use transition::{DeclaredTransition, TransitionBuilder};
