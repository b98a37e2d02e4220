//! Unit tests for the triage data model
//!
//! Tests the core model types shared across the workspace

use triage_core::*;

// =============================================================================
// Rule Tests
// =============================================================================

#[test]
fn test_rule_trims_symptom() {
    let rule = TriageRule::new("Breathing Flowchart", "  Stridor ", Category::new(1).unwrap())
        .unwrap();
    assert_eq!(rule.symptom, "Stridor");
    assert_eq!(rule.color(), TriageColor::Red);
}

#[test]
fn test_rule_rejects_empty_symptom() {
    let err = TriageRule::new("Breathing Flowchart", "   ", Category::new(1).unwrap()).unwrap_err();
    assert!(matches!(err, CoreError::InvalidRule(_)));
}

#[test]
fn test_rule_folds_newlines_into_spaces() {
    let rule = TriageRule::new("Breathing\nFlowchart", "Wheeze\nsevere", Category::new(2).unwrap())
        .unwrap();
    assert_eq!(rule.flowchart, "Breathing Flowchart");
    assert_eq!(rule.symptom, "Wheeze severe");
}

#[test]
fn test_ruleset_preserves_order() {
    let mut rules = RuleSet::new();
    for (symptom, category) in [("Shock", 1), ("Apnoea", 1), ("Cough", 4)] {
        rules.push(TriageRule::new("Flowchart", symptom, Category::new(category).unwrap()).unwrap());
    }

    let symptoms: Vec<&str> = rules.iter().map(|r| r.symptom.as_str()).collect();
    assert_eq!(symptoms, vec!["Shock", "Apnoea", "Cough"]);
    assert_eq!(rules.len(), 3);
}

#[test]
fn test_ruleset_serializes_as_plain_list() -> anyhow::Result<()> {
    let rules: RuleSet = vec![TriageRule::new("Fever", "Rash", Category::new(2)?)?].into();
    let json = serde_json::to_value(&rules)?;

    assert!(json.is_array());
    assert_eq!(json[0]["flowchart"], "Fever");
    assert_eq!(json[0]["symptom"], "Rash");
    assert_eq!(json[0]["category"], 2);
    Ok(())
}

// =============================================================================
// Token Tests
// =============================================================================

#[test]
fn test_token_from_tuple() {
    let token: PositionedToken = ("•Stridor", 70.0, 200.0).into();
    assert_eq!(token.text, "•Stridor");
    assert_eq!(token.x, 70.0);
    assert_eq!(token.y, 200.0);
}

#[test]
fn test_token_deserialize() -> anyhow::Result<()> {
    let token: PositionedToken = serde_json::from_str(r#"{"text": "No", "x": 200, "y": 215.5}"#)?;
    assert_eq!(token, PositionedToken::new("No", 200.0, 215.5));
    Ok(())
}

// =============================================================================
// Patient Tests
// =============================================================================

#[test]
fn test_patient_deserialize_without_symptoms() -> anyhow::Result<()> {
    let patient: Patient = serde_json::from_str(r#"{"id": "p-9", "age": 3}"#)?;
    assert_eq!(patient.id, "p-9");
    assert!(patient.symptoms.is_empty());
    Ok(())
}

#[test]
fn test_patient_deserialize_symptom_values() -> anyhow::Result<()> {
    let patient: Patient = serde_json::from_str(
        r#"{"id": "p-1", "age": 7, "symptoms": [
            {"name": "Temperature", "numeric_value": 40.1},
            {"name": "Pain", "string_value": "severe"}
        ]}"#,
    )?;
    assert_eq!(patient.symptoms[0].numeric_value, Some(40.1));
    assert_eq!(patient.symptoms[1].string_value.as_deref(), Some("severe"));
    Ok(())
}
