//! Rule artifact formats
//!
//! The compiler writes one of these and the rule store reads it back. The DRL
//! text is the legacy format kept byte-compatible with existing rule files;
//! the record formats carry the same rules as plain structured data.

use crate::types::{Category, TriageColor, TriageRule};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Marker preceding each symptom name in DRL text
pub const DRL_SYMPTOM_MARKER: &str = "Symptom( name == \"";

/// Marker preceding the color name in DRL text
pub const DRL_RESULT_MARKER: &str = "insert(new TriageResult(\"";

/// Marker opening a DRL rule header
pub const DRL_RULE_MARKER: &str = "rule \"Rule_";

/// Current version of the record artifact layout
pub const RECORD_VERSION: u32 = 1;

/// On-disk artifact format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    /// Declarative rule text, one block per rule
    #[default]
    Drl,
    /// JSON record list
    Json,
    /// YAML record list
    Yaml,
}

impl ArtifactFormat {
    /// Pick a format from the file extension; unknown extensions mean DRL
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => ArtifactFormat::Json,
            Some("yaml") | Some("yml") => ArtifactFormat::Yaml,
            _ => ArtifactFormat::Drl,
        }
    }
}

/// Escape a string for a DRL double-quoted literal
pub fn drl_escape(value: &str) -> String {
    value.replace('"', "\\\"").replace('\n', " ")
}

/// Reverse of [`drl_escape`] for quotes. Newlines are not recoverable.
pub fn drl_unescape(value: &str) -> String {
    value.replace("\\\"", "\"")
}

/// One rule in a record artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRecord {
    /// Sequential id starting at 1
    pub id: usize,
    pub flowchart: String,
    pub symptom: String,
    pub category: Category,
    /// Informational; the category is authoritative
    pub color: TriageColor,
}

impl RuleRecord {
    pub fn from_rule(id: usize, rule: &TriageRule) -> Self {
        Self {
            id,
            flowchart: rule.flowchart.clone(),
            symptom: rule.symptom.clone(),
            category: rule.category,
            color: rule.color(),
        }
    }

    pub fn into_rule(self) -> crate::Result<TriageRule> {
        TriageRule::new(self.flowchart, self.symptom, self.category)
    }
}

/// Record artifact document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordArtifact {
    pub version: u32,
    #[serde(default)]
    pub rules: Vec<RuleRecord>,
}

impl RecordArtifact {
    pub fn from_rules<'a, I>(rules: I) -> Self
    where
        I: IntoIterator<Item = &'a TriageRule>,
    {
        Self {
            version: RECORD_VERSION,
            rules: rules
                .into_iter()
                .enumerate()
                .map(|(i, rule)| RuleRecord::from_rule(i + 1, rule))
                .collect(),
        }
    }
}
