//! Core trait definitions for the repository pattern
//!
//! [`RuleRepository`] is the read-only interface the runtime uses to obtain
//! compiled rules. The file-backed [`RuleStore`](crate::RuleStore) is the
//! production implementation; [`MemoryRepository`](crate::MemoryRepository)
//! serves tests and embedders that compile in-process.

use crate::RepositoryResult;
use std::collections::BTreeSet;
use triage_core::{RuleSet, SymptomIndex};

/// Source of compiled triage rules
///
/// All implementations must be `Send + Sync` so a loaded engine can be
/// shared across threads.
pub trait RuleRepository: Send + Sync {
    /// Human-readable location, used in logs and errors
    fn describe(&self) -> String;

    /// Load every rule, in artifact order
    ///
    /// A missing artifact is not an error: it yields an empty rule set.
    fn load_rules(&self) -> RepositoryResult<RuleSet>;

    /// Load the rules and build a symptom index from them
    fn load_index(&self) -> RepositoryResult<SymptomIndex> {
        let rules = self.load_rules()?;
        Ok(SymptomIndex::from(&rules))
    }

    /// Distinct symptom names, sorted
    fn distinct_symptoms(&self) -> RepositoryResult<BTreeSet<String>> {
        Ok(self.load_index()?.distinct_symptoms())
    }
}
