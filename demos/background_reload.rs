//! Background regeneration example
//!
//! This example demonstrates:
//! - Regenerating rules on a blocking worker
//! - Classifying against the previous snapshot while regeneration runs
//! - Inspecting the result as JSON

use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use triage_sdk::{Patient, TriageServiceBuilder};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "triage_sdk=info".into()),
        )
        .init();

    println!("=== Background Reload Example ===\n");

    let service = Arc::new(
        TriageServiceBuilder::new()
            .source_path("spec/icts_tokens.json")
            .artifact_path("target/demo_rules/triage.json")
            .build()?,
    );

    if service.generate_if_outdated(false)? {
        println!("Rules generated");
    } else {
        service.init()?;
        println!("Rules appear to be up-to-date");
    }

    let patient = Patient::new("child-001", 6).with_symptoms(["Low SpO2", "Warm"]);
    let before = service.classify(&patient)?;

    let reload = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.generate_in_background().await })
    };

    // The published snapshot keeps serving while the worker compiles
    let during = service.classify(&patient)?;
    let rules = reload.await??;
    let after = service.classify(&patient)?;

    println!("Before reload: {}", serde_json::to_string(&before)?);
    println!("During reload: {}", serde_json::to_string(&during)?);
    println!("After reload ({} rules): {}", rules.len(), serde_json::to_string(&after)?);

    Ok(())
}
