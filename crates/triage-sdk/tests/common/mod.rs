//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use triage_sdk::{TriageService, TriageServiceBuilder};

/// Token dump for the Tachypnoea flowchart: one Green symptom
pub const TACHYPNOEA_TOKENS: &str = r#"[
  {"text": "Tachypnoea Flowchart", "x": 40.0, "y": 70.0},
  {"text": "•Cough", "x": 70.0, "y": 200.0},
  {"text": "4", "x": 500.0, "y": 200.0},
  {"text": "No", "x": 200.0, "y": 210.0}
]"#;

/// Token dump with two flowcharts of different severity
pub const TWO_FLOWCHART_TOKENS: &str = r#"{
  "document": "icts.pdf",
  "protected": false,
  "tokens": [
    {"text": "Page 1", "x": 40.0, "y": 60.0},
    {"text": "Breathing Flowchart", "x": 40.0, "y": 70.0},
    {"text": "•Stridor", "x": 70.0, "y": 200.0},
    {"text": "•Shock", "x": 70.0, "y": 210.0},
    {"text": "1", "x": 500.0, "y": 205.0},
    {"text": "No", "x": 200.0, "y": 215.0},
    {"text": "•Rash", "x": 70.0, "y": 300.0},
    {"text": "3", "x": 500.0, "y": 300.0},
    {"text": "No", "x": 200.0, "y": 310.0}
  ]
}"#;

/// Temporary workspace holding a token dump and an artifact path
pub struct TestWorkspace {
    pub dir: TempDir,
    pub source: PathBuf,
    pub artifact: PathBuf,
}

impl TestWorkspace {
    /// Workspace with the given token dump and a DRL artifact path
    pub fn new(tokens: &str) -> Self {
        Self::with_artifact(tokens, "generated_rules/triage.drl")
    }

    pub fn with_artifact(tokens: &str, artifact: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("icts_tokens.json");
        fs::write(&source, tokens).unwrap();
        let artifact = dir.path().join(artifact);
        Self {
            dir,
            source,
            artifact,
        }
    }

    /// Build a service over this workspace without loading rules
    pub fn service(&self) -> TriageService {
        TriageServiceBuilder::new()
            .source_path(&self.source)
            .artifact_path(&self.artifact)
            .build()
            .unwrap()
    }
}
