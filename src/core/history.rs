//! One-step undo/redo history.
//!
//! The history remembers at most one state to go back to and one state to go
//! forward to. It is not a stack: every state change overwrites the single
//! `previous` slot, and undo never consumes it.

use super::config::StateId;
use serde::{Deserialize, Serialize};

/// Previous/future state slots of a state machine.
///
/// # Example
///
/// ```rust
/// use stepwise::core::StateHistory;
///
/// let mut history = StateHistory::new();
/// history.record("idle");
///
/// assert_eq!(history.undo_target("running"), Some("idle"));
/// assert_eq!(history.undo_target("idle"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateHistory {
    previous: Option<StateId>,
    future: Option<StateId>,
}

impl StateHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `state` as the one to return to on undo.
    ///
    /// Overwrites whatever was remembered before. The future slot is left
    /// alone.
    pub fn record(&mut self, state: impl Into<StateId>) {
        self.previous = Some(state.into());
    }

    /// Remember `state` as the one to return to on redo.
    pub fn remember_future(&mut self, state: impl Into<StateId>) {
        self.future = Some(state.into());
    }

    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    pub fn future(&self) -> Option<&str> {
        self.future.as_deref()
    }

    /// State an undo from `current` would move to.
    ///
    /// `None` when nothing is remembered or the remembered state is `current`
    /// itself.
    pub fn undo_target(&self, current: &str) -> Option<&str> {
        self.previous().filter(|previous| *previous != current)
    }

    /// State a redo from `current` would move to.
    pub fn redo_target(&self, current: &str) -> Option<&str> {
        self.future().filter(|future| *future != current)
    }

    /// Forget both slots.
    pub fn clear(&mut self) {
        self.previous = None;
        self.future = None;
    }

    pub fn is_empty(&self) -> bool {
        self.previous.is_none() && self.future.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_empty() {
        let history = StateHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.undo_target("a"), None);
        assert_eq!(history.redo_target("a"), None);
    }

    #[test]
    fn record_overwrites_previous() {
        let mut history = StateHistory::new();
        history.record("a");
        history.record("b");

        assert_eq!(history.previous(), Some("b"));
    }

    #[test]
    fn record_leaves_future_untouched() {
        let mut history = StateHistory::new();
        history.remember_future("c");
        history.record("a");

        assert_eq!(history.future(), Some("c"));
    }

    #[test]
    fn targets_equal_to_current_are_unavailable() {
        let mut history = StateHistory::new();
        history.record("a");
        history.remember_future("b");

        assert_eq!(history.undo_target("a"), None);
        assert_eq!(history.undo_target("b"), Some("a"));
        assert_eq!(history.redo_target("b"), None);
        assert_eq!(history.redo_target("a"), Some("b"));
    }

    #[test]
    fn clear_forgets_both_slots() {
        let mut history = StateHistory::new();
        history.record("a");
        history.remember_future("b");

        history.clear();

        assert!(history.is_empty());
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = StateHistory::new();
        history.record("a");

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
