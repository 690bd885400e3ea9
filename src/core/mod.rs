//! Core state machine types and logic.
//!
//! This module contains everything the state machine is made of:
//! - Declarative configuration via `MachineConfig` and `StateTable`
//! - One-step undo/redo tracking via `StateHistory`
//! - The `StateMachine` itself and its error type

mod config;
mod error;
mod history;
mod machine;

pub use config::{EventId, MachineConfig, StateDefinition, StateId, StateTable};
pub use error::FsmError;
pub use history::StateHistory;
pub use machine::StateMachine;
