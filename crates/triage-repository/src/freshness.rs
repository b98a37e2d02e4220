//! Artifact freshness relative to its token source

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::SystemTime;

/// How a rule artifact relates to the source it is compiled from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactStatus {
    /// No source to compile from
    SourceMissing,
    /// Source present, artifact never generated
    ArtifactMissing,
    /// Source modified after the artifact was written
    Outdated,
    UpToDate,
}

impl ArtifactStatus {
    /// Whether the artifact should be regenerated
    pub fn needs_generation(self) -> bool {
        matches!(self, ArtifactStatus::ArtifactMissing | ArtifactStatus::Outdated)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactStatus::SourceMissing => "source missing",
            ArtifactStatus::ArtifactMissing => "artifact missing",
            ArtifactStatus::Outdated => "outdated",
            ArtifactStatus::UpToDate => "up to date",
        }
    }
}

impl std::fmt::Display for ArtifactStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn modified(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Compare modification times of source and artifact
///
/// Unreadable metadata counts as a missing file.
pub fn artifact_status(source: &Path, artifact: &Path) -> ArtifactStatus {
    let Some(source_time) = modified(source) else {
        return ArtifactStatus::SourceMissing;
    };
    let Some(artifact_time) = modified(artifact) else {
        return ArtifactStatus::ArtifactMissing;
    };

    if source_time > artifact_time {
        ArtifactStatus::Outdated
    } else {
        ArtifactStatus::UpToDate
    }
}

/// True when the artifact is missing or older than its source
///
/// Always false when the source itself is missing: there is nothing to
/// regenerate from.
pub fn is_outdated(source: impl AsRef<Path>, artifact: impl AsRef<Path>) -> bool {
    artifact_status(source.as_ref(), artifact.as_ref()).needs_generation()
}
