//! Error types for the repository layer

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors that can occur while reading rule artifacts
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// Artifact exists but could not be read
    #[error("Failed to read artifact {}: {error}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// JSON record artifact could not be parsed
    #[error("Failed to parse JSON artifact: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// YAML record artifact could not be parsed
    #[error("Failed to parse YAML artifact: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// A record violates a model invariant
    #[error("Malformed rule record: {0}")]
    Malformed(String),
}

impl From<triage_core::CoreError> for RepositoryError {
    fn from(err: triage_core::CoreError) -> Self {
        RepositoryError::Malformed(err.to_string())
    }
}
