//! Runtime error types

use thiserror::Error;

/// Runtime error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    /// No usable rules could be loaded; classification is refused
    #[error("Triage engine not initialized from {artifact}: {reason}")]
    EngineUninitialized { artifact: String, reason: String },
}

impl RuntimeError {
    pub(crate) fn uninitialized(artifact: impl Into<String>, reason: impl Into<String>) -> Self {
        RuntimeError::EngineUninitialized {
            artifact: artifact.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
