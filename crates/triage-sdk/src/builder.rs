//! Builder pattern for TriageService

use crate::config::EngineConfig;
use crate::error::Result;
use crate::service::TriageService;
use std::path::PathBuf;
use triage_core::ArtifactFormat;
use triage_parser::LayoutGeometry;

/// Builder for TriageService
///
/// # Example
///
/// ```rust,no_run
/// use triage_sdk::TriageServiceBuilder;
///
/// let service = TriageServiceBuilder::new()
///     .source_path("spec/icts_tokens.json")
///     .artifact_path("generated_rules/triage.drl")
///     .build_and_init()?;
///
/// let result = service.classify_input("p1", "4", "Stridor, Cough")?;
/// println!("{}", result);
/// # Ok::<(), triage_sdk::SdkError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TriageServiceBuilder {
    config: EngineConfig,
}

impl TriageServiceBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the token dump the rules are compiled from
    pub fn source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.repository.source_path = path.into();
        self
    }

    /// Set the rule artifact location
    pub fn artifact_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.repository.artifact_path = path.into();
        self
    }

    /// Force an artifact format regardless of extension
    pub fn format(mut self, format: ArtifactFormat) -> Self {
        self.config.repository.format = Some(format);
        self
    }

    /// Override the page geometry used by the layout parser
    pub fn geometry(mut self, geometry: LayoutGeometry) -> Self {
        self.config.compiler.geometry = geometry;
        self
    }

    /// Set the upper bound of the accepted age range
    pub fn max_age(mut self, max_age: u8) -> Self {
        self.config.max_age = max_age;
        self
    }

    /// Build the service without loading rules
    pub fn build(self) -> Result<TriageService> {
        self.config.validate()?;
        Ok(TriageService::new(self.config))
    }

    /// Build the service and load the artifact
    pub fn build_and_init(self) -> Result<TriageService> {
        let service = self.build()?;
        service.init()?;
        Ok(service)
    }
}
