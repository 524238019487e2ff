//! Adapter types wiring the harness to the system under test.
//!
//! The harness never touches the system under test directly: events are
//! fired and states asserted through injected effect factories, run
//! against a caller-supplied environment (the handle to the live system).

use crate::core::Configuration;
use crate::harness::error::AdapterError;
use std::sync::Arc;
use stillwater::effect::BoxedEffect;

/// Factory for the effect that executes one named event against the
/// system under test.
///
/// A fresh effect is created per execution; the effect resolves once the
/// event's effect has been issued to the system.
pub type EventAction<Env> = Arc<dyn Fn() -> BoxedEffect<(), AdapterError, Env> + Send + Sync>;

/// Factory for the effect that asserts the system under test currently
/// reflects the expected configuration.
///
/// Receives the expected configuration so assertions can check context
/// fields as well as the state name.
pub type StateCheck<Env> =
    Arc<dyn Fn(Configuration) -> BoxedEffect<(), AdapterError, Env> + Send + Sync>;
