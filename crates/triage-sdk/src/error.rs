//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Compiler error
    #[error("Compiler error: {0}")]
    CompileError(#[from] triage_compiler::CompileError),

    /// Repository error
    #[error("Repository error: {0}")]
    RepositoryError(#[from] triage_repository::RepositoryError),

    /// Runtime error
    #[error("Runtime error: {0}")]
    RuntimeError(#[from] triage_runtime::RuntimeError),

    /// Raw boundary input could not be interpreted
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Engine not initialized
    #[error("Engine not initialized")]
    NotInitialized,

    /// Background task failed to complete
    #[error("Background task failed: {0}")]
    TaskError(String),
}

impl SdkError {
    /// True when the caller should regenerate rules before classifying
    pub fn is_uninitialized(&self) -> bool {
        matches!(
            self,
            SdkError::NotInitialized
                | SdkError::RuntimeError(triage_runtime::RuntimeError::EngineUninitialized { .. })
        )
    }
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
