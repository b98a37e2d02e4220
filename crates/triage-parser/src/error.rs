//! Parser error types

use thiserror::Error;

/// Parser error
#[derive(Error, Debug)]
pub enum ParseError {
    /// The token source is missing, unreadable or access-protected
    #[error("Source unavailable: {document}: {reason}")]
    SourceUnavailable { document: String, reason: String },

    /// Token dump is not valid JSON
    #[error("Invalid token dump: {0}")]
    InvalidTokenDump(#[from] serde_json::Error),
}

impl ParseError {
    pub fn source_unavailable(document: impl Into<String>, reason: impl Into<String>) -> Self {
        ParseError::SourceUnavailable {
            document: document.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
