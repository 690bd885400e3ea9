//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and a macro for declaring machine
//! configurations in code instead of JSON.

pub mod machine;
pub mod macros;

pub use machine::StateMachineBuilder;
