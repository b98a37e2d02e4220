//! Pediatric Triage SDK
//!
//! High-level API over the rule compiler, the rule store and the triage
//! engine. Most callers want [`TriageService`]; the free functions below
//! cover one-shot use.

pub mod builder;
pub mod config;
pub mod error;
pub mod input;
pub mod service;

use std::collections::BTreeSet;
use std::path::Path;
use triage_compiler::RuleCompiler;
use triage_parser::TokenDumpFile;
use triage_repository::RuleStore;

// Re-export main types
pub use builder::TriageServiceBuilder;
pub use config::{EngineConfig, DEFAULT_MAX_AGE};
pub use error::{Result, SdkError};
pub use service::TriageService;

// Re-export commonly used types from dependencies
pub use triage_core::{
    ArtifactFormat, Category, Patient, RuleSet, Symptom, TriageColor, TriageResult, TriageRule,
};
pub use triage_repository::{ArtifactStatus, RepositoryConfig};
pub use triage_runtime::{TriageEngine, TriageTrace};

/// Compile the token dump at `source` into a rule artifact at `output`
///
/// The artifact format follows the output extension.
pub fn generate(source: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<RuleSet> {
    let source = TokenDumpFile::new(source);
    Ok(RuleCompiler::new().compile(&source, output.as_ref())?)
}

/// True when `output` is missing or older than `source`
pub fn is_outdated(source: impl AsRef<Path>, output: impl AsRef<Path>) -> bool {
    triage_repository::is_outdated(source, output)
}

/// Distinct symptom names in the artifact at `output`, sorted
///
/// Empty when the artifact does not exist.
pub fn list_symptoms(output: impl AsRef<Path>) -> Result<BTreeSet<String>> {
    Ok(RuleStore::new(output).distinct_symptoms()?)
}
