//! Error types for the lottery simulator.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Rules or simulation parameters fail their constraints.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// An operation was attempted before the state it depends on exists.
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl SimError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SimError::configuration("min_number must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: min_number must be at least 1"
        );

        let err = SimError::invalid_state("draw has not happened yet");
        assert_eq!(err.to_string(), "Invalid state: draw has not happened yet");
    }

    #[test]
    fn test_error_kind_helpers() {
        assert!(SimError::configuration("x").is_configuration());
        assert!(!SimError::configuration("x").is_invalid_state());
        assert!(SimError::invalid_state("x").is_invalid_state());
    }
}
