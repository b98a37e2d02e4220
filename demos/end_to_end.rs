//! End-to-end triage example
//!
//! This example demonstrates:
//! - Compiling a token dump into a DRL rule artifact
//! - Loading the artifact into a TriageService
//! - Classifying patients, including one with no matching symptoms

use triage_sdk::{Patient, Symptom, TriageServiceBuilder};

fn main() -> anyhow::Result<()> {
    println!("=== End-to-End Triage Example ===\n");

    let service = TriageServiceBuilder::new()
        .source_path("spec/icts_tokens.json")
        .artifact_path("target/demo_rules/triage.drl")
        .build()?;

    let rules = service.generate_and_reload()?;
    println!("Compiled {} rules:", rules.len());
    for rule in &rules {
        println!("  [{}] {} -> {}", rule.flowchart, rule.symptom, rule.color());
    }

    println!("\nAvailable symptoms:");
    for symptom in service.list_symptoms()? {
        println!("  - {}", symptom);
    }

    let patients = vec![
        Patient::new("child-001", 4).with_symptoms(["Cough", "Stridor"]),
        Patient::new("child-002", 9)
            .with_symptom(Symptom::new("Hot child").with_numeric_value(39.2))
            .with_symptom(Symptom::new("Warm")),
        Patient::new("child-003", 12).with_symptoms(["Earache"]),
    ];

    println!();
    for patient in &patients {
        let trace = service.classify_with_trace(patient)?;
        let names: Vec<String> = patient.symptoms.iter().map(|s| s.to_string()).collect();
        println!("{} [{}]", patient.id, names.join(", "));
        for matched in &trace.matches {
            println!("  matched {} {:?}", matched.symptom, matched.categories);
        }
        println!("  {}", trace.result);
    }

    // Raw text goes through boundary validation
    match service.classify_input("child-004", "forty", "Cough") {
        Ok(result) => println!("\nUnexpected result: {}", result),
        Err(e) => println!("\nRejected raw input: {}", e),
    }

    Ok(())
}
