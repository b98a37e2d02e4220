//! CLI configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use triage_parser::LayoutGeometry;
use triage_sdk::{ArtifactFormat, EngineConfig, RepositoryConfig, DEFAULT_MAX_AGE};

/// Config file looked up when none is given, without extension
pub const DEFAULT_CONFIG_FILE: &str = "config/triage";

/// Prefix of environment overrides, e.g. `TRIAGE_ARTIFACT_PATH`
pub const ENV_PREFIX: &str = "TRIAGE";

fn default_source_path() -> PathBuf {
    RepositoryConfig::default().source_path
}

fn default_artifact_path() -> PathBuf {
    RepositoryConfig::default().artifact_path
}

fn default_max_age() -> u8 {
    DEFAULT_MAX_AGE
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Token dump extracted from the guideline
    #[serde(default = "default_source_path")]
    pub source_path: PathBuf,

    /// Compiled rule artifact
    #[serde(default = "default_artifact_path")]
    pub artifact_path: PathBuf,

    /// Artifact format override (drl, json, yaml)
    #[serde(default)]
    pub format: Option<ArtifactFormat>,

    /// Oldest accepted patient age
    #[serde(default = "default_max_age")]
    pub max_age: u8,

    /// Page geometry used by the layout parser
    #[serde(default)]
    pub geometry: LayoutGeometry,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            source_path: default_source_path(),
            artifact_path: default_artifact_path(),
            format: None,
            max_age: DEFAULT_MAX_AGE,
            geometry: LayoutGeometry::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from `.env`, the default config file and the
    /// environment
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load configuration from a named file (extension optional), then the
    /// environment. A missing file is not an error.
    pub fn load_from(name: &str) -> anyhow::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(name).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", name, e))?;

        config
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))
    }

    /// Engine configuration for the SDK
    pub fn engine_config(&self) -> EngineConfig {
        let mut repository = RepositoryConfig::new(&self.source_path, &self.artifact_path);
        repository.format = self.format;

        let mut engine = EngineConfig::new().with_repository(repository);
        engine.compiler.geometry = self.geometry.clone();
        engine.max_age = self.max_age;
        engine
    }
}
