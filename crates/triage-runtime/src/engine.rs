//! Triage engine
//!
//! Classification is a direct lookup over an immutable [`SymptomIndex`]: each
//! patient symptom is matched by exact name and the most severe (lowest)
//! category across all matches decides the outcome.

use crate::error::{Result, RuntimeError};
use crate::trace::{SymptomMatch, TriageTrace};
use std::path::Path;
use std::sync::Arc;
use triage_core::{Patient, SymptomIndex, TriageResult};
use triage_repository::{RuleRepository, RuleStore};

/// Loaded, ready-to-classify triage engine
///
/// An engine only exists when at least one rule was loaded, so every value
/// of this type can classify. Cloning shares the underlying index.
#[derive(Debug, Clone)]
pub struct TriageEngine {
    index: Arc<SymptomIndex>,
    source: String,
}

impl TriageEngine {
    /// Create an engine over an in-memory index
    pub fn new(index: SymptomIndex) -> Result<Self> {
        Self::from_index("<memory>", index)
    }

    /// Load the rule artifact at `path`
    ///
    /// # Example
    /// ```no_run
    /// use triage_core::Patient;
    /// use triage_runtime::TriageEngine;
    ///
    /// let engine = TriageEngine::load("generated_rules/triage.drl")?;
    /// let result = engine.classify(&Patient::new("p1", 4).with_symptoms(["Stridor"]));
    /// println!("{}", result);
    /// # Ok::<(), triage_runtime::RuntimeError>(())
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_repository(&RuleStore::new(path))
    }

    /// Load rules from any repository
    pub fn from_repository(repository: &dyn RuleRepository) -> Result<Self> {
        let source = repository.describe();
        let index = repository
            .load_index()
            .map_err(|e| RuntimeError::uninitialized(source.clone(), e.to_string()))?;
        Self::from_index(source, index)
    }

    fn from_index(source: impl Into<String>, index: SymptomIndex) -> Result<Self> {
        let source = source.into();
        if index.is_empty() {
            tracing::warn!(artifact = %source, "No triage rules loaded");
            return Err(RuntimeError::uninitialized(source, "no rules loaded"));
        }

        tracing::info!(
            artifact = %source,
            rules = index.rule_count(),
            symptoms = index.len(),
            "Triage engine initialized"
        );

        Ok(Self {
            index: Arc::new(index),
            source,
        })
    }

    pub fn index(&self) -> &SymptomIndex {
        &self.index
    }

    /// Where the rules were loaded from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Classify a patient
    ///
    /// Returns Blue when no symptom matches. Age is not consulted.
    pub fn classify(&self, patient: &Patient) -> TriageResult {
        let most_severe = patient
            .symptoms
            .iter()
            .filter_map(|symptom| self.index.categories(&symptom.name))
            .flat_map(|categories| categories.iter().copied())
            .min();

        let result = most_severe
            .map(TriageResult::from_category)
            .unwrap_or_default();

        tracing::debug!(patient = %patient.id, result = %result, "Classified patient");
        result
    }

    /// Classify and report which symptoms matched
    pub fn classify_with_trace(&self, patient: &Patient) -> TriageTrace {
        let matches: Vec<SymptomMatch> = patient
            .symptoms
            .iter()
            .filter_map(|symptom| {
                self.index.categories(&symptom.name).map(|categories| SymptomMatch {
                    symptom: symptom.name.clone(),
                    categories: categories.iter().copied().collect(),
                })
            })
            .collect();

        let result = matches
            .iter()
            .filter_map(SymptomMatch::most_severe)
            .min()
            .map(TriageResult::from_category)
            .unwrap_or_default();

        TriageTrace { result, matches }
    }
}
