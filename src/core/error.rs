//! Errors raised by state machine construction and transitions.

use thiserror::Error;

/// Errors that can occur when building or driving a state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsmError {
    /// No usable configuration was supplied at construction.
    #[error("Invalid state machine configuration: {0}")]
    InvalidConfig(String),

    /// The requested state is not a key of the configured state table.
    #[error("Unknown state: {0}")]
    UnknownState(String),
}

impl From<serde_json::Error> for FsmError {
    fn from(err: serde_json::Error) -> Self {
        FsmError::InvalidConfig(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_state_names_the_state() {
        let err = FsmError::UnknownState("parked".to_string());
        assert_eq!(err.to_string(), "Unknown state: parked");
    }

    #[test]
    fn json_errors_become_invalid_config() {
        let err: FsmError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, FsmError::InvalidConfig(_)));
    }
}
