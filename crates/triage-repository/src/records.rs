//! Record artifact reader (JSON / YAML)

use crate::error::RepositoryResult;
use triage_core::artifact::RecordArtifact;
use triage_core::RuleSet;

pub fn read_json(content: &str) -> RepositoryResult<RuleSet> {
    let artifact: RecordArtifact = serde_json::from_str(content)?;
    into_rules(artifact)
}

pub fn read_yaml(content: &str) -> RepositoryResult<RuleSet> {
    let artifact: RecordArtifact = serde_yaml::from_str(content)?;
    into_rules(artifact)
}

fn into_rules(artifact: RecordArtifact) -> RepositoryResult<RuleSet> {
    artifact
        .rules
        .into_iter()
        .map(|record| record.into_rule().map_err(Into::into))
        .collect()
}
