//! Command implementations
//!
//! Each command writes its report to the given writer so it can be
//! exercised without a terminal.

use anyhow::Result;
use std::io::Write;
use std::sync::Arc;
use triage_sdk::{input, SdkError, TriageService};

/// Message shown whenever classification is refused for lack of rules
pub const UNINITIALIZED_MESSAGE: &str = "Engine is not initialized. Please generate rules first.";

/// Compile rules from the token source
pub async fn generate(service: Arc<TriageService>, force: bool, out: &mut dyn Write) -> Result<()> {
    if !service.should_generate(force) {
        writeln!(
            out,
            "Rules appear to be up-to-date. Use --force to regenerate anyway."
        )?;
        return Ok(());
    }

    writeln!(out, "Generating rules...")?;
    let rules = service.generate_in_background().await?;
    writeln!(
        out,
        "Generated {} rules to {}",
        rules.len(),
        service.config().repository.artifact_path.display()
    )?;
    Ok(())
}

/// Report artifact freshness and contents
pub fn status(service: &TriageService, out: &mut dyn Write) -> Result<()> {
    let repository = &service.config().repository;
    writeln!(out, "Source:   {}", repository.source_path.display())?;
    writeln!(out, "Artifact: {}", repository.artifact_path.display())?;
    writeln!(out, "Status:   {}", service.artifact_status())?;

    match service.init() {
        Ok(()) => {
            if let Some(engine) = service.engine() {
                writeln!(out, "Rules:    {}", engine.index().rule_count())?;
                writeln!(out, "Symptoms: {}", engine.index().len())?;
            }
        }
        Err(e) if e.is_uninitialized() => writeln!(out, "{}", UNINITIALIZED_MESSAGE)?,
        Err(e) => return Err(e.into()),
    }

    if service.is_outdated() {
        writeln!(out, "WARNING: Rules are outdated relative to the token source. Please regenerate rules.")?;
    }
    Ok(())
}

/// List the distinct symptoms in the artifact
pub fn symptoms(service: &TriageService, out: &mut dyn Write) -> Result<()> {
    let symptoms = service.list_symptoms()?;
    if symptoms.is_empty() {
        writeln!(out, "No symptoms found or rules missing.")?;
        return Ok(());
    }

    writeln!(out, "--- Available Symptoms ---")?;
    for symptom in &symptoms {
        writeln!(out, "- {}", symptom)?;
    }
    writeln!(out, "--------------------------")?;
    Ok(())
}

/// Raw triage request as typed on the command line
#[derive(Debug, Clone)]
pub struct TriageRequest {
    pub id: String,
    pub age: String,
    pub symptoms: String,
    pub explain: bool,
}

/// Classify one patient
pub fn triage(service: &TriageService, request: &TriageRequest, out: &mut dyn Write) -> Result<()> {
    if let Err(e) = service.init() {
        if e.is_uninitialized() {
            anyhow::bail!(UNINITIALIZED_MESSAGE);
        }
        return Err(e.into());
    }
    if service.is_outdated() {
        tracing::warn!("Rules are outdated relative to the token source. Please regenerate rules.");
    }

    let patient = input::patient_from_input(
        request.id.as_str(),
        &request.age,
        &request.symptoms,
        service.config().max_age,
    )?;

    let trace = match service.classify_with_trace(&patient) {
        Ok(trace) => trace,
        Err(SdkError::NotInitialized) => anyhow::bail!(UNINITIALIZED_MESSAGE),
        Err(e) => return Err(e.into()),
    };

    if request.explain {
        for matched in &trace.matches {
            let categories: Vec<String> = matched
                .categories
                .iter()
                .map(|c| format!("{} ({})", c.value(), c.color()))
                .collect();
            writeln!(out, "  {} -> {}", matched.symptom, categories.join(", "))?;
        }
        if trace.is_default() {
            writeln!(out, "  no symptom matched a rule")?;
        }
    }

    writeln!(out, ">>> {}", trace.result)?;
    Ok(())
}
