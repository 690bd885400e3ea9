//! Declarative machine configuration.
//!
//! A configuration names the initial state and, for every state, the events
//! it reacts to and the state each event leads to. Configurations are plain
//! data: they can be written in code, produced by the
//! [`StateMachineBuilder`](crate::builder::StateMachineBuilder), or read from
//! JSON of the shape
//!
//! ```json
//! {
//!   "initial": "idle",
//!   "states": {
//!     "idle":    { "transitions": { "start": "running" } },
//!     "running": { "transitions": { "stop": "idle" } }
//!   }
//! }
//! ```

use super::error::FsmError;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Identifier of a configured state.
pub type StateId = String;

/// Identifier of an event that may trigger a transition.
pub type EventId = String;

/// Outgoing transitions of a single state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    /// Event id to target state id
    #[serde(default)]
    pub transitions: BTreeMap<EventId, StateId>,
}

impl StateDefinition {
    /// Create a state with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition, returning the updated definition.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stepwise::core::StateDefinition;
    ///
    /// let idle = StateDefinition::new().with_transition("start", "running");
    /// assert_eq!(idle.target("start"), Some("running"));
    /// assert_eq!(idle.target("stop"), None);
    /// ```
    pub fn with_transition(
        mut self,
        event: impl Into<EventId>,
        target: impl Into<StateId>,
    ) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Target state for `event`, if one is configured.
    ///
    /// An empty target string counts as "no transition".
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions
            .get(event)
            .map(String::as_str)
            .filter(|target| !target.is_empty())
    }
}

/// Insertion-ordered mapping from state id to its definition.
///
/// The order states were declared in is preserved, both when built in code
/// and when read from JSON. Inserting an id that is already present replaces
/// its definition in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateTable {
    entries: Vec<(StateId, StateDefinition)>,
}

impl StateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a state definition.
    ///
    /// Returns the previous definition when `id` was already present.
    pub fn insert(
        &mut self,
        id: impl Into<StateId>,
        definition: StateDefinition,
    ) -> Option<StateDefinition> {
        let id = id.into();
        match self.position(&id) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, definition)),
            None => {
                self.entries.push((id, definition));
                None
            }
        }
    }

    /// Whether `id` is a configured state.
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&StateDefinition> {
        self.position(id).map(|index| &self.entries[index].1)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut StateDefinition> {
        self.position(id).map(move |index| &mut self.entries[index].1)
    }

    /// State ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    /// States and their definitions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateDefinition)> {
        self.entries
            .iter()
            .map(|(id, definition)| (id.as_str(), definition))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|(existing, _)| existing == id)
    }
}

impl<K: Into<StateId>> FromIterator<(K, StateDefinition)> for StateTable {
    fn from_iter<I: IntoIterator<Item = (K, StateDefinition)>>(iter: I) -> Self {
        let mut table = StateTable::new();
        for (id, definition) in iter {
            table.insert(id, definition);
        }
        table
    }
}

impl Serialize for StateTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(id, definition)| (id, definition)))
    }
}

impl<'de> Deserialize<'de> for StateTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = StateTable;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of state ids to state definitions")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<StateTable, A::Error> {
                let mut table = StateTable::new();
                while let Some((id, definition)) =
                    access.next_entry::<StateId, StateDefinition>()?
                {
                    table.insert(id, definition);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}

/// Complete description of a state machine.
///
/// The configuration is handed to [`StateMachine`](crate::core::StateMachine)
/// at construction and never changes afterwards. Nothing here checks that
/// `initial` names a configured state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// State the machine starts in and returns to on reset
    pub initial: StateId,
    /// Configured states in declaration order
    pub states: StateTable,
}

impl MachineConfig {
    pub fn new(initial: impl Into<StateId>, states: StateTable) -> Self {
        Self {
            initial: initial.into(),
            states,
        }
    }

    /// Parse a configuration from JSON text.
    ///
    /// A JSON `null` document means no configuration was supplied and is
    /// rejected, as is anything that does not have the configuration shape.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stepwise::core::{FsmError, MachineConfig};
    ///
    /// let config = MachineConfig::from_json(
    ///     r#"{"initial": "off", "states": {"off": {"transitions": {"flip": "on"}}, "on": {}}}"#,
    /// )
    /// .unwrap();
    /// assert_eq!(config.initial, "off");
    /// assert_eq!(config.states.ids().collect::<Vec<_>>(), vec!["off", "on"]);
    ///
    /// assert!(matches!(
    ///     MachineConfig::from_json("null"),
    ///     Err(FsmError::InvalidConfig(_))
    /// ));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        let parsed: Option<MachineConfig> = serde_json::from_str(json)?;
        parsed.ok_or_else(|| FsmError::InvalidConfig("no configuration supplied".to_string()))
    }

    /// Serialize the configuration back to JSON, preserving state order.
    pub fn to_json(&self) -> Result<String, FsmError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl FromStr for MachineConfig {
    type Err = FsmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}
