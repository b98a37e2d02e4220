//! Positioned text sources
//!
//! Extracting glyph positions from the guideline's binary container happens
//! outside this workspace. The extractor hands over a token dump: JSON, either
//! a bare array of tokens or an envelope that also names the document and
//! says whether it was access-protected.

use crate::error::{ParseError, Result};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use triage_core::PositionedToken;

/// Anything that can supply tokens in document order
pub trait TokenSource: Send + Sync {
    /// Human-readable name used in errors and logs
    fn describe(&self) -> String;

    fn read_tokens(&self) -> Result<Vec<PositionedToken>>;
}

impl TokenSource for Vec<PositionedToken> {
    fn describe(&self) -> String {
        format!("<{} in-memory tokens>", self.len())
    }

    fn read_tokens(&self) -> Result<Vec<PositionedToken>> {
        Ok(self.clone())
    }
}

impl TokenSource for [PositionedToken] {
    fn describe(&self) -> String {
        format!("<{} in-memory tokens>", self.len())
    }

    fn read_tokens(&self) -> Result<Vec<PositionedToken>> {
        Ok(self.to_vec())
    }
}

/// Token dump contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenDump {
    Tokens(Vec<PositionedToken>),
    Document {
        #[serde(default)]
        document: Option<String>,
        #[serde(default)]
        protected: bool,
        tokens: Vec<PositionedToken>,
    },
}

impl TokenDump {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, TokenDump::Document { protected: true, .. })
    }

    pub fn into_tokens(self) -> Vec<PositionedToken> {
        match self {
            TokenDump::Tokens(tokens) | TokenDump::Document { tokens, .. } => tokens,
        }
    }
}

/// Token dump stored on disk
#[derive(Debug, Clone)]
pub struct TokenDumpFile {
    path: PathBuf,
}

impl TokenDumpFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, reason: impl Into<String>) -> ParseError {
        ParseError::source_unavailable(self.path.display().to_string(), reason)
    }
}

impl TokenSource for TokenDumpFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_tokens(&self) -> Result<Vec<PositionedToken>> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => self.unavailable("file not found"),
            ErrorKind::PermissionDenied => self.unavailable("access denied"),
            _ => self.unavailable(e.to_string()),
        })?;

        let dump = TokenDump::parse(&content)?;
        if dump.is_protected() {
            return Err(self.unavailable("document is access-protected"));
        }

        let tokens = dump.into_tokens();
        tracing::debug!(source = %self.path.display(), tokens = tokens.len(), "Read token dump");
        Ok(tokens)
    }
}
