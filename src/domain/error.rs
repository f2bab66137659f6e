//! Error types for switchboard.

use thiserror::Error;

/// Main error type for strategy dispatch.
///
/// `Precondition` is part of the service contract even though no built-in
/// service currently fails its verify step.
#[allow(dead_code)]
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Strategy key is not present in the registry
    #[error("unknown strategy key: '{0}'")]
    UnknownKey(String),

    /// A service precondition check failed
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// User-supplied input could not be parsed
    #[error("invalid input: {0}")]
    InputFormat(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DispatchError {
    /// True for errors the prompt loop recovers from by asking again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DispatchError::InputFormat(_) | DispatchError::UnknownKey(_)
        )
    }
}
