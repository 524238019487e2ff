//! Core machine types and the execution engine.
//!
//! This module contains the pure functional core:
//! - Value types: [`Event`], [`Context`], [`Configuration`]
//! - Behavior parameterization: [`Guard`] predicates and [`Action`] updates
//! - [`MachineDefinition`] with the pure [`step`](MachineDefinition::step)
//!   execution engine
//!
//! Everything here is side-effect free; the replay harness is the only
//! part of the crate that performs effects.

mod action;
mod config;
mod context;
mod event;
mod guard;
mod machine;

pub use action::Action;
pub use config::Configuration;
pub use context::Context;
pub use event::Event;
pub use guard::Guard;
pub use machine::{MachineDefinition, TransitionRule};
