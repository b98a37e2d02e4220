//! Symptom index built from a rule set

use super::category::Category;
use super::rule::{RuleSet, TriageRule};
use std::collections::{BTreeSet, HashMap};

/// Lookup table from exact symptom name to the categories it maps to
///
/// Built once from a [`RuleSet`] and never mutated afterwards. Lookups are
/// exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymptomIndex {
    entries: HashMap<String, BTreeSet<Category>>,
    rule_count: usize,
}

impl SymptomIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rules<'a, I>(rules: I) -> Self
    where
        I: IntoIterator<Item = &'a TriageRule>,
    {
        let mut entries: HashMap<String, BTreeSet<Category>> = HashMap::new();
        let mut rule_count = 0;

        for rule in rules {
            entries
                .entry(rule.symptom.clone())
                .or_default()
                .insert(rule.category);
            rule_count += 1;
        }

        Self {
            entries,
            rule_count,
        }
    }

    /// Categories for a symptom, if any rule mentions it
    pub fn categories(&self, symptom: &str) -> Option<&BTreeSet<Category>> {
        self.entries.get(symptom)
    }

    pub fn contains(&self, symptom: &str) -> bool {
        self.entries.contains_key(symptom)
    }

    /// Number of rules the index was built from
    pub fn rule_count(&self) -> usize {
        self.rule_count
    }

    /// Number of distinct symptom names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct symptom names in lexicographic order
    pub fn distinct_symptoms(&self) -> BTreeSet<String> {
        self.entries.keys().cloned().collect()
    }
}

impl From<&RuleSet> for SymptomIndex {
    fn from(rules: &RuleSet) -> Self {
        SymptomIndex::from_rules(rules.iter())
    }
}
