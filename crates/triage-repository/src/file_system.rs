//! File system based rule store

use crate::error::{RepositoryError, RepositoryResult};
use crate::traits::RuleRepository;
use crate::{drl, records};
use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use triage_core::{ArtifactFormat, RuleSet, SymptomIndex};

/// Rule artifact stored on disk
///
/// The artifact is read on every load; nothing is cached, so a recompiled
/// artifact is picked up by the next load.
#[derive(Debug, Clone)]
pub struct RuleStore {
    path: PathBuf,
    format: ArtifactFormat,
}

impl RuleStore {
    /// Create a store, deriving the format from the file extension
    ///
    /// # Example
    /// ```no_run
    /// use triage_repository::RuleStore;
    ///
    /// let store = RuleStore::new("generated_rules/triage.drl");
    /// let symptoms = store.distinct_symptoms().unwrap();
    /// ```
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let format = ArtifactFormat::from_path(&path);
        Self { path, format }
    }

    /// Create a store with an explicit format
    pub fn with_format(path: impl AsRef<Path>, format: ArtifactFormat) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            format,
        }
    }

    /// Load an artifact straight into a symptom index
    pub fn load(path: impl AsRef<Path>) -> RepositoryResult<SymptomIndex> {
        RuleStore::new(path).load_index()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> ArtifactFormat {
        self.format
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read the artifact; `None` when it does not exist
    fn read_content(&self) -> RepositoryResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RepositoryError::Io {
                path: self.path.clone(),
                error: e,
            }),
        }
    }

    /// Distinct symptom names, sorted; empty when the artifact is absent
    pub fn distinct_symptoms(&self) -> RepositoryResult<BTreeSet<String>> {
        RuleRepository::distinct_symptoms(self)
    }
}

impl RuleRepository for RuleStore {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load_rules(&self) -> RepositoryResult<RuleSet> {
        let Some(content) = self.read_content()? else {
            tracing::debug!(artifact = %self.path.display(), "Rule artifact not found");
            return Ok(RuleSet::new());
        };

        let rules = match self.format {
            ArtifactFormat::Drl => drl::read_rules(&content),
            ArtifactFormat::Json => records::read_json(&content)?,
            ArtifactFormat::Yaml => records::read_yaml(&content)?,
        };

        tracing::debug!(
            artifact = %self.path.display(),
            rules = rules.len(),
            "Loaded rule artifact"
        );
        Ok(rules)
    }

    /// DRL artifacts list every marker line, including blocks without a
    /// result
    fn distinct_symptoms(&self) -> RepositoryResult<BTreeSet<String>> {
        match self.format {
            ArtifactFormat::Drl => Ok(self
                .read_content()?
                .map(|content| drl::symptom_names(&content))
                .unwrap_or_default()),
            ArtifactFormat::Json | ArtifactFormat::Yaml => Ok(self.load_index()?.distinct_symptoms()),
        }
    }
}
