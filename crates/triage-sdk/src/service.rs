//! TriageService - generation, loading and classification in one place
//!
//! The service owns the configured paths and publishes engine snapshots.
//! A snapshot is replaced wholesale on every successful load, so a
//! classification that already holds one keeps a consistent index even
//! while rules are regenerated.

use crate::config::EngineConfig;
use crate::error::{Result, SdkError};
use crate::input;
use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock};
use triage_compiler::RuleCompiler;
use triage_core::{Patient, RuleSet, TriageResult};
use triage_parser::TokenDumpFile;
use triage_repository::{artifact_status, ArtifactStatus, RuleStore};
use triage_runtime::{TriageEngine, TriageTrace};

/// Triage service
pub struct TriageService {
    config: EngineConfig,
    compiler: RuleCompiler,
    engine: RwLock<Option<Arc<TriageEngine>>>,
}

impl TriageService {
    /// Create a service without loading any rules
    pub fn new(config: EngineConfig) -> Self {
        let compiler = RuleCompiler::with_options(config.resolved_compiler_options());
        Self {
            config,
            compiler,
            engine: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn store(&self) -> RuleStore {
        self.config.store()
    }

    fn publish(&self, engine: Option<Arc<TriageEngine>>) {
        *self.engine.write().unwrap_or_else(PoisonError::into_inner) = engine;
    }

    /// Current engine snapshot, if initialized
    pub fn engine(&self) -> Option<Arc<TriageEngine>> {
        self.engine
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Load the artifact and publish a new engine snapshot
    ///
    /// On failure the previous snapshot is withdrawn, so classification is
    /// refused until a later `init` succeeds.
    pub fn init(&self) -> Result<()> {
        match TriageEngine::from_repository(&self.store()) {
            Ok(engine) => {
                self.publish(Some(Arc::new(engine)));
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Triage engine unavailable, please regenerate rules");
                self.publish(None);
                Err(e.into())
            }
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.engine().is_some()
    }

    /// Freshness of the artifact relative to its token source
    pub fn artifact_status(&self) -> ArtifactStatus {
        artifact_status(
            &self.config.repository.source_path,
            &self.config.repository.artifact_path,
        )
    }

    pub fn is_outdated(&self) -> bool {
        self.artifact_status().needs_generation()
    }

    /// Distinct symptom names in the current artifact, sorted
    pub fn list_symptoms(&self) -> Result<BTreeSet<String>> {
        Ok(self.store().distinct_symptoms()?)
    }

    /// Compile the configured source into the configured artifact
    ///
    /// The published snapshot is left untouched; call [`init`](Self::init)
    /// or use [`generate_and_reload`](Self::generate_and_reload) to pick up
    /// the new rules.
    pub fn generate(&self) -> Result<RuleSet> {
        let source = TokenDumpFile::new(&self.config.repository.source_path);
        let rules = self
            .compiler
            .compile(&source, &self.config.repository.artifact_path)?;
        Ok(rules)
    }

    /// Compile, then publish an engine over the fresh artifact
    pub fn generate_and_reload(&self) -> Result<RuleSet> {
        let rules = self.generate()?;
        self.init()?;
        Ok(rules)
    }

    /// Whether [`generate_if_outdated`](Self::generate_if_outdated) would compile
    ///
    /// An existing artifact is kept when its source has gone missing; with
    /// no artifact at all, compilation is attempted so the missing source is
    /// reported.
    pub fn should_generate(&self, force: bool) -> bool {
        if force {
            return true;
        }
        match self.artifact_status() {
            ArtifactStatus::UpToDate => false,
            ArtifactStatus::SourceMissing => !self.store().exists(),
            ArtifactStatus::ArtifactMissing | ArtifactStatus::Outdated => true,
        }
    }

    /// Regenerate unless the artifact is already current
    ///
    /// Returns whether compilation ran.
    pub fn generate_if_outdated(&self, force: bool) -> Result<bool> {
        if !self.should_generate(force) {
            tracing::info!(
                status = %self.artifact_status(),
                "Rules appear up-to-date, skipping generation"
            );
            return Ok(false);
        }

        self.generate_and_reload()?;
        Ok(true)
    }

    /// Compile on a blocking worker, then reload
    ///
    /// Classification keeps using the previous snapshot until the new one is
    /// published.
    pub async fn generate_in_background(self: &Arc<Self>) -> Result<RuleSet> {
        let service = Arc::clone(self);
        tokio::task::spawn_blocking(move || service.generate_and_reload())
            .await
            .map_err(|e| SdkError::TaskError(e.to_string()))?
    }

    /// Classify a patient against the published snapshot
    pub fn classify(&self, patient: &Patient) -> Result<TriageResult> {
        let engine = self.engine().ok_or(SdkError::NotInitialized)?;
        Ok(engine.classify(patient))
    }

    /// Classify and report matched symptoms
    pub fn classify_with_trace(&self, patient: &Patient) -> Result<TriageTrace> {
        let engine = self.engine().ok_or(SdkError::NotInitialized)?;
        Ok(engine.classify_with_trace(patient))
    }

    /// Classify raw boundary text
    ///
    /// `symptoms` is a comma-separated list. Input is validated before the
    /// engine is consulted.
    pub fn classify_input(&self, id: &str, age: &str, symptoms: &str) -> Result<TriageResult> {
        let patient = input::patient_from_input(id, age, symptoms, self.config.max_age)?;
        self.classify(&patient)
    }
}

impl std::fmt::Debug for TriageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriageService")
            .field("config", &self.config)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
