//! Builder for constructing state machines.

use crate::core::{
    EventId, FsmError, MachineConfig, StateDefinition, StateId, StateMachine, StateTable,
};

/// Builder for constructing state machines with a fluent API.
///
/// States are kept in the order they are first mentioned, whether through
/// [`state`](Self::state) or as the source of a
/// [`transition`](Self::transition).
///
/// # Example
///
/// ```rust
/// use stepwise::builder::StateMachineBuilder;
///
/// let mut machine = StateMachineBuilder::new()
///     .initial("closed")
///     .transition("closed", "open", "opened")
///     .transition("opened", "close", "closed")
///     .build()
///     .unwrap();
///
/// machine.trigger("open").unwrap();
/// assert_eq!(machine.state(), "opened");
/// ```
#[derive(Clone, Debug, Default)]
pub struct StateMachineBuilder {
    initial: Option<StateId>,
    states: StateTable,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state, with no transitions if it is new.
    pub fn state(mut self, id: impl Into<StateId>) -> Self {
        let id = id.into();
        if !self.states.contains(&id) {
            self.states.insert(id, StateDefinition::new());
        }
        self
    }

    /// Declare a fully specified state, replacing any earlier declaration.
    pub fn define(mut self, id: impl Into<StateId>, definition: StateDefinition) -> Self {
        self.states.insert(id, definition);
        self
    }

    /// Add a transition from `from` on `event` to `to`.
    ///
    /// `from` is declared if it is not known yet. `to` is not; a target that
    /// is never declared makes the transition fail when triggered.
    pub fn transition(
        mut self,
        from: impl Into<StateId>,
        event: impl Into<EventId>,
        to: impl Into<StateId>,
    ) -> Self {
        let from = from.into();
        let (event, to) = (event.into(), to.into());
        match self.states.get_mut(&from) {
            Some(definition) => {
                definition.transitions.insert(event, to);
            }
            None => {
                self.states
                    .insert(from, StateDefinition::new().with_transition(event, to));
            }
        }
        self
    }

    /// Build the configuration only.
    /// Returns an error if the initial state is missing.
    pub fn build_config(self) -> Result<MachineConfig, FsmError> {
        let initial = self.initial.ok_or_else(|| {
            FsmError::InvalidConfig(
                "Initial state not specified. Call .initial(state) before .build()".to_string(),
            )
        })?;
        Ok(MachineConfig::new(initial, self.states))
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing.
    pub fn build(self) -> Result<StateMachine, FsmError> {
        self.build_config().map(StateMachine::new)
    }
}
