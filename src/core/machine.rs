//! Configuration-driven state machine with one-step undo/redo.

use super::config::{MachineConfig, StateId};
use super::error::FsmError;
use super::history::StateHistory;
use tracing::{debug, trace};

/// State machine driven by a [`MachineConfig`].
///
/// The machine tracks a single current state. It moves either directly with
/// [`change_state`](Self::change_state) or by event with
/// [`trigger`](Self::trigger), and can step one state back and forth with
/// [`undo`](Self::undo) and [`redo`](Self::redo).
///
/// Every mutating method takes `&mut self`; share an instance across threads
/// behind one `Mutex`.
///
/// # Example
///
/// ```rust
/// use stepwise::core::StateMachine;
/// use stepwise::machine_config;
///
/// let mut machine = StateMachine::new(machine_config! {
///     initial: "idle",
///     states: {
///         "idle" => { "start" => "running" },
///         "running" => { "stop" => "idle" },
///     }
/// });
///
/// machine.trigger("start").unwrap();
/// machine.trigger("stop").unwrap();
/// assert_eq!(machine.state(), "idle");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "running");
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "idle");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: MachineConfig,
    current: StateId,
    history: StateHistory,
}

impl StateMachine {
    /// Create a machine in the configuration's initial state.
    ///
    /// The initial state is taken as-is, even if it is not a configured state.
    pub fn new(config: MachineConfig) -> Self {
        let current = config.initial.clone();
        debug!(initial = %current, states = config.states.len(), "state machine created");
        Self {
            config,
            current,
            history: StateHistory::new(),
        }
    }

    /// Create a machine from a configuration that may be missing.
    ///
    /// Fails with [`FsmError::InvalidConfig`] when `config` is `None`.
    pub fn try_new(config: Option<MachineConfig>) -> Result<Self, FsmError> {
        config
            .map(Self::new)
            .ok_or_else(|| FsmError::InvalidConfig("no configuration supplied".to_string()))
    }

    /// Create a machine from a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        MachineConfig::from_json(json).map(Self::new)
    }

    /// Get current state (pure)
    pub fn state(&self) -> &str {
        &self.current
    }

    pub fn initial(&self) -> &str {
        &self.config.initial
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Whether `id` is a configured state.
    pub fn has_state(&self, id: &str) -> bool {
        self.config.states.contains(id)
    }

    /// Move directly to `target`.
    ///
    /// The current state becomes the undo target. Fails with
    /// [`FsmError::UnknownState`] and changes nothing when `target` is not
    /// configured.
    pub fn change_state(&mut self, target: &str) -> Result<(), FsmError> {
        if !self.has_state(target) {
            return Err(FsmError::UnknownState(target.to_string()));
        }
        let from = std::mem::replace(&mut self.current, target.to_string());
        debug!(from = %from, to = %target, "state changed");
        self.history.record(from);
        Ok(())
    }

    /// Apply `event` to the current state.
    ///
    /// Fails with [`FsmError::UnknownState`] when the current state has no
    /// transition for `event`, exactly as if the missing target had been
    /// passed to [`change_state`](Self::change_state).
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let target = self
            .config
            .states
            .get(&self.current)
            .ok_or_else(|| FsmError::UnknownState(self.current.clone()))?
            .target(event)
            .ok_or_else(|| {
                FsmError::UnknownState(format!("no '{event}' transition from '{}'", self.current))
            })?
            .to_string();
        trace!(state = %self.current, event, target = %target, "event triggered");
        self.change_state(&target)
    }

    /// Return to the initial state.
    ///
    /// Like any other move, the state being left becomes the undo target.
    pub fn reset(&mut self) {
        let from = std::mem::replace(&mut self.current, self.config.initial.clone());
        debug!(from = %from, to = %self.current, "state machine reset");
        self.history.record(from);
    }

    /// Configured states, optionally narrowed to those reacting to `event`.
    ///
    /// With `None` (or an empty event) every state is returned. Otherwise only
    /// states with a non-empty target for `event` are. Declaration order is
    /// kept in both cases.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stepwise::core::StateMachine;
    /// use stepwise::machine_config;
    ///
    /// let machine = StateMachine::new(machine_config! {
    ///     initial: "draft",
    ///     states: {
    ///         "draft" => { "submit" => "review" },
    ///         "review" => { "approve" => "published", "reject" => "draft" },
    ///         "published" => {},
    ///     }
    /// });
    ///
    /// assert_eq!(machine.states(None), vec!["draft", "review", "published"]);
    /// assert_eq!(machine.states(Some("reject")), vec!["review"]);
    /// assert!(machine.states(Some("archive")).is_empty());
    /// ```
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        match event.filter(|event| !event.is_empty()) {
            None => self.config.states.ids().collect(),
            Some(event) => self
                .config
                .states
                .iter()
                .filter(|(_, definition)| definition.target(event).is_some())
                .map(|(id, _)| id)
                .collect(),
        }
    }

    /// Whether [`undo`](Self::undo) would move the machine.
    pub fn can_undo(&self) -> bool {
        self.history.undo_target(&self.current).is_some()
    }

    /// Whether [`redo`](Self::redo) would move the machine.
    pub fn can_redo(&self) -> bool {
        self.history.redo_target(&self.current).is_some()
    }

    /// Step back to the previous state.
    ///
    /// Returns `false` when there is no previous state or it is the current
    /// one. The previous slot is kept, so undo after redo goes back again.
    pub fn undo(&mut self) -> bool {
        let Some(target) = self.history.undo_target(&self.current).map(str::to_string) else {
            trace!(state = %self.current, "undo unavailable");
            return false;
        };
        let from = std::mem::replace(&mut self.current, target);
        debug!(from = %from, to = %self.current, "undo");
        self.history.remember_future(from);
        true
    }

    /// Step forward to the state left by the last undo.
    ///
    /// Returns `false` when there is no such state or it is the current one.
    pub fn redo(&mut self) -> bool {
        let Some(target) = self.history.redo_target(&self.current).map(str::to_string) else {
            trace!(state = %self.current, "redo unavailable");
            return false;
        };
        debug!(from = %self.current, to = %target, "redo");
        self.current = target;
        true
    }

    /// Forget undo and redo targets.
    pub fn clear_history(&mut self) {
        debug!(state = %self.current, "history cleared");
        self.history.clear();
    }
}

impl TryFrom<Option<MachineConfig>> for StateMachine {
    type Error = FsmError;

    fn try_from(config: Option<MachineConfig>) -> Result<Self, Self::Error> {
        Self::try_new(config)
    }
}

impl From<MachineConfig> for StateMachine {
    fn from(config: MachineConfig) -> Self {
        Self::new(config)
    }
}
