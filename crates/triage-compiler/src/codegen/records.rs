//! Structured record generator (JSON / YAML)

use crate::error::{CompileError, Result};
use triage_core::artifact::RecordArtifact;
use triage_core::RuleSet;

/// Record artifact generator
pub struct RecordGenerator;

impl RecordGenerator {
    pub fn json(rules: &RuleSet) -> Result<String> {
        let artifact = RecordArtifact::from_rules(rules);
        let mut out = serde_json::to_string_pretty(&artifact)
            .map_err(|e| CompileError::Serialization(e.to_string()))?;
        out.push('\n');
        Ok(out)
    }

    pub fn yaml(rules: &RuleSet) -> Result<String> {
        let artifact = RecordArtifact::from_rules(rules);
        serde_yaml::to_string(&artifact).map_err(|e| CompileError::Serialization(e.to_string()))
    }
}
