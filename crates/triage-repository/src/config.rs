//! Repository configuration
//!
//! Where the token source lives and where its compiled artifact is written.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use triage_core::ArtifactFormat;

/// Default token dump extracted from the ICTS guideline
pub const DEFAULT_SOURCE_PATH: &str = "spec/icts_tokens.json";

/// Default compiled rule artifact
pub const DEFAULT_ARTIFACT_PATH: &str = "generated_rules/triage.drl";

fn default_source_path() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE_PATH)
}

fn default_artifact_path() -> PathBuf {
    PathBuf::from(DEFAULT_ARTIFACT_PATH)
}

/// Repository configuration
///
/// # Examples
///
/// ```rust
/// use triage_repository::RepositoryConfig;
///
/// let config = RepositoryConfig::new("spec/tokens.json", "out/triage.json");
/// assert_eq!(config.artifact_format(), triage_core::ArtifactFormat::Json);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Token dump the rules are compiled from
    #[serde(default = "default_source_path")]
    pub source_path: PathBuf,

    /// Compiled rule artifact
    #[serde(default = "default_artifact_path")]
    pub artifact_path: PathBuf,

    /// Artifact format; derived from `artifact_path` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ArtifactFormat>,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            source_path: default_source_path(),
            artifact_path: default_artifact_path(),
            format: None,
        }
    }
}

impl RepositoryConfig {
    pub fn new(source_path: impl Into<PathBuf>, artifact_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            artifact_path: artifact_path.into(),
            format: None,
        }
    }

    pub fn with_format(mut self, format: ArtifactFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn artifact_format(&self) -> ArtifactFormat {
        self.format
            .unwrap_or_else(|| ArtifactFormat::from_path(&self.artifact_path))
    }

    /// Rule store over the configured artifact
    pub fn store(&self) -> crate::RuleStore {
        crate::RuleStore::with_format(&self.artifact_path, self.artifact_format())
    }
}
