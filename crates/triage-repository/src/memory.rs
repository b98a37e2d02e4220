//! In-memory rule repository

use crate::error::RepositoryResult;
use crate::traits::RuleRepository;
use triage_core::RuleSet;

/// Rules held in memory, typically straight from the compiler
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    rules: RuleSet,
}

impl MemoryRepository {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }
}

impl RuleRepository for MemoryRepository {
    fn describe(&self) -> String {
        format!("<memory: {} rules>", self.rules.len())
    }

    fn load_rules(&self) -> RepositoryResult<RuleSet> {
        Ok(self.rules.clone())
    }
}
