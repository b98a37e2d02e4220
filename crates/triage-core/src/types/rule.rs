//! Compiled triage rules

use super::category::{Category, TriageColor};
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// A single rule: a symptom under a flowchart maps to a category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TriageRule {
    /// Flowchart (decision branch) the rule was read from
    pub flowchart: String,

    /// Exact symptom name matched at runtime
    pub symptom: String,

    /// Severity assigned when the symptom is present
    pub category: Category,
}

impl TriageRule {
    /// Create a new rule
    ///
    /// Symptom names are trimmed; an empty symptom is rejected. Embedded
    /// newlines become spaces in both names, matching what the DRL artifact
    /// can store.
    pub fn new(
        flowchart: impl Into<String>,
        symptom: impl Into<String>,
        category: Category,
    ) -> Result<Self> {
        let symptom = symptom.into().replace('\n', " ").trim().to_string();
        if symptom.is_empty() {
            return Err(CoreError::InvalidRule("symptom must not be empty".to_string()));
        }

        Ok(TriageRule {
            flowchart: flowchart.into().replace('\n', " "),
            symptom,
            category,
        })
    }

    pub fn color(&self) -> TriageColor {
        self.category.color()
    }
}

/// Ordered rules produced by one compilation, in flush order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<TriageRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rule: TriageRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[TriageRule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TriageRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn into_rules(self) -> Vec<TriageRule> {
        self.rules
    }
}

impl From<Vec<TriageRule>> for RuleSet {
    fn from(rules: Vec<TriageRule>) -> Self {
        RuleSet { rules }
    }
}

impl FromIterator<TriageRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = TriageRule>>(iter: I) -> Self {
        RuleSet {
            rules: iter.into_iter().collect(),
        }
    }
}

impl Extend<TriageRule> for RuleSet {
    fn extend<I: IntoIterator<Item = TriageRule>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}

impl IntoIterator for RuleSet {
    type Item = TriageRule;
    type IntoIter = std::vec::IntoIter<TriageRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a TriageRule;
    type IntoIter = std::slice::Iter<'a, TriageRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
