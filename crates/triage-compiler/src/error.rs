//! Compiler error types

use std::path::PathBuf;
use thiserror::Error;
use triage_parser::ParseError;

/// Compiler error
#[derive(Error, Debug)]
pub enum CompileError {
    /// Token source missing, unreadable, malformed or access-protected
    #[error("Source unavailable: {document}: {reason}")]
    SourceUnavailable { document: String, reason: String },

    /// Destination could not be created or written
    #[error("Failed to write rule artifact {}: {error}", path.display())]
    ArtifactWriteFailure {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Rules could not be rendered in the requested format
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CompileError {
    pub(crate) fn write_failure(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        CompileError::ArtifactWriteFailure {
            path: path.into(),
            error,
        }
    }

    /// Convert a parser error, naming the source it came from
    pub(crate) fn from_parse(document: String, err: ParseError) -> Self {
        match err {
            ParseError::SourceUnavailable { document, reason } => {
                CompileError::SourceUnavailable { document, reason }
            }
            ParseError::InvalidTokenDump(e) => CompileError::SourceUnavailable {
                document,
                reason: format!("unreadable token dump: {}", e),
            },
        }
    }
}

/// Result type for compiler operations
pub type Result<T> = std::result::Result<T, CompileError>;
