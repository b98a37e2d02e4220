//! Configuration types for TriageService

use crate::error::{Result, SdkError};
use serde::{Deserialize, Serialize};
use triage_compiler::CompilerOptions;
use triage_core::ArtifactFormat;
use triage_repository::{RepositoryConfig, RuleStore};

/// Oldest age, in years, accepted at the boundary by default
pub const DEFAULT_MAX_AGE: u8 = 15;

fn default_max_age() -> u8 {
    DEFAULT_MAX_AGE
}

/// Main engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Token source and artifact locations
    #[serde(flatten)]
    pub repository: RepositoryConfig,

    /// Compiler options
    #[serde(default)]
    pub compiler: CompilerOptions,

    /// Upper bound of the pediatric age range, inclusive
    #[serde(default = "default_max_age")]
    pub max_age: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            repository: RepositoryConfig::default(),
            compiler: CompilerOptions::default(),
            max_age: DEFAULT_MAX_AGE,
        }
    }
}

impl EngineConfig {
    /// Create a new engine configuration with default paths
    pub fn new() -> Self {
        Self::default()
    }

    /// Set repository configuration
    pub fn with_repository(mut self, repository: RepositoryConfig) -> Self {
        self.repository = repository;
        self
    }

    /// Set compiler options
    pub fn with_compiler_options(mut self, options: CompilerOptions) -> Self {
        self.compiler = options;
        self
    }

    /// Format the artifact is both written and read in
    ///
    /// The repository format wins, then the compiler format, then the
    /// artifact extension.
    pub fn artifact_format(&self) -> ArtifactFormat {
        self.repository
            .format
            .or(self.compiler.format)
            .unwrap_or_else(|| ArtifactFormat::from_path(&self.repository.artifact_path))
    }

    /// Compiler options with the artifact format resolved
    pub fn resolved_compiler_options(&self) -> CompilerOptions {
        let mut options = self.compiler.clone();
        options.format = Some(self.artifact_format());
        options
    }

    /// Rule store reading the artifact in the resolved format
    pub fn store(&self) -> RuleStore {
        RuleStore::with_format(&self.repository.artifact_path, self.artifact_format())
    }

    /// Reject configurations that cannot work
    pub fn validate(&self) -> Result<()> {
        if self.repository.source_path.as_os_str().is_empty() {
            return Err(SdkError::ConfigError("source path is empty".to_string()));
        }
        if self.repository.artifact_path.as_os_str().is_empty() {
            return Err(SdkError::ConfigError("artifact path is empty".to_string()));
        }
        if self.repository.source_path == self.repository.artifact_path {
            return Err(SdkError::ConfigError(
                "source and artifact paths must differ".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_flattened_paths() {
        let config: EngineConfig = serde_json::from_str(
            r#"{"source_path": "tokens.json", "artifact_path": "out/rules.yaml", "max_age": 17}"#,
        )
        .unwrap();

        assert_eq!(config.repository.source_path, PathBuf::from("tokens.json"));
        assert_eq!(config.max_age, 17);
        assert_eq!(
            config.resolved_compiler_options().format,
            Some(ArtifactFormat::Yaml)
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_compiler_format_applies_to_store() {
        let config = EngineConfig::new()
            .with_repository(RepositoryConfig::new("tokens.json", "rules/triage.drl"))
            .with_compiler_options(CompilerOptions {
                format: Some(ArtifactFormat::Json),
                ..CompilerOptions::default()
            });

        assert_eq!(config.artifact_format(), ArtifactFormat::Json);
        assert_eq!(config.resolved_compiler_options().format, Some(ArtifactFormat::Json));
        assert_eq!(config.store().format(), ArtifactFormat::Json);
    }

    #[test]
    fn test_repository_format_wins() {
        let config = EngineConfig::new()
            .with_repository(
                RepositoryConfig::new("tokens.json", "rules/triage.drl")
                    .with_format(ArtifactFormat::Yaml),
            )
            .with_compiler_options(CompilerOptions {
                format: Some(ArtifactFormat::Json),
                ..CompilerOptions::default()
            });

        assert_eq!(config.artifact_format(), ArtifactFormat::Yaml);
        assert_eq!(config.store().format(), ArtifactFormat::Yaml);
    }

    #[test]
    fn test_same_paths_rejected() {
        let config = EngineConfig::new()
            .with_repository(RepositoryConfig::new("rules.drl", "rules.drl"));
        assert!(matches!(config.validate(), Err(SdkError::ConfigError(_))));
    }
}
