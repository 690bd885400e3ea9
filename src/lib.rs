//! Stepwise: a small configuration-driven state machine
//!
//! A machine is described by a declarative configuration: an initial state
//! and, for each state, the events it reacts to and where each event leads.
//! The machine tracks one current state, moves it on demand, and remembers a
//! single step of history in each direction for undo and redo.
//!
//! # Core Concepts
//!
//! - **Configuration**: `MachineConfig`, written in code or read from JSON
//! - **State machine**: `StateMachine`, the current state and its transitions
//! - **History**: `StateHistory`, one undo step and one redo step
//!
//! # Example
//!
//! ```rust
//! use stepwise::{FsmError, StateMachine};
//!
//! let mut machine = StateMachine::from_json(
//!     r#"{
//!         "initial": "idle",
//!         "states": {
//!             "idle": { "transitions": { "start": "running" } },
//!             "running": { "transitions": { "stop": "idle" } }
//!         }
//!     }"#,
//! )?;
//!
//! machine.trigger("start")?;
//! assert_eq!(machine.state(), "running");
//!
//! assert!(matches!(machine.trigger("start"), Err(FsmError::UnknownState(_))));
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "idle");
//! # Ok::<(), FsmError>(())
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use self::builder::StateMachineBuilder;
pub use self::core::{
    FsmError, MachineConfig, StateDefinition, StateHistory, StateMachine, StateTable,
};
