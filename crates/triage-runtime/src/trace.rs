//! Classification trace

use serde::Serialize;
use triage_core::{Category, TriageResult};

/// A patient symptom that matched one or more rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymptomMatch {
    pub symptom: String,

    /// Matched categories, most severe first
    pub categories: Vec<Category>,
}

impl SymptomMatch {
    /// Most severe category matched by this symptom
    pub fn most_severe(&self) -> Option<Category> {
        self.categories.first().copied()
    }
}

/// Classification outcome together with the matches that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriageTrace {
    pub result: TriageResult,

    /// Matches in patient symptom order; unmatched symptoms are omitted
    pub matches: Vec<SymptomMatch>,
}

impl TriageTrace {
    /// True when no symptom matched and the default outcome was used
    pub fn is_default(&self) -> bool {
        self.matches.is_empty()
    }
}
