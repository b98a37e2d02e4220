//! Error types for Triage Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid category: {0} (expected 1-5)")]
    InvalidCategory(u8),

    #[error("Invalid rule: {0}")]
    InvalidRule(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
