//! Unit tests for the file-backed RuleStore
//!
//! These tests cover artifact formats, graceful absence and symptom listing.

use std::fs;
use tempfile::TempDir;
use triage_core::{ArtifactFormat, Category, RuleSet, TriageRule};
use triage_repository::{MemoryRepository, RepositoryError, RuleRepository, RuleStore};

const DRL_ARTIFACT: &str = r#"package generated_rules;

import com.triage.model.Patient;
import com.triage.model.Symptom;
import com.triage.model.TriageResult;

rule "Rule_1_Breathing"
    when
        $p : Patient( $s : symptoms )
        Symptom( name == "Apnoea" ) from $s
    then
        insert(new TriageResult("Red"));
end

rule "Rule_2_Breathing"
    when
        $p : Patient( $s : symptoms )
        Symptom( name == "Tachypnoea" ) from $s
    then
        insert(new TriageResult("Green"));
end

rule "Rule_3_Fever"
    when
        $p : Patient( $s : symptoms )
        Symptom( name == "Tachypnoea" ) from $s
    then
        insert(new TriageResult("Yellow"));
end

"#;

fn rule(flowchart: &str, symptom: &str, category: u8) -> TriageRule {
    TriageRule::new(flowchart, symptom, Category::new(category).unwrap()).unwrap()
}

/// Helper function to write an artifact into a fresh directory
fn write_artifact(name: &str, content: &str) -> (TempDir, RuleStore) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    fs::write(&path, content).unwrap();
    let store = RuleStore::new(&path);
    (temp_dir, store)
}

// =============================================================================
// DRL artifacts
// =============================================================================

#[test]
fn test_load_drl_artifact() {
    let (_dir, store) = write_artifact("triage.drl", DRL_ARTIFACT);
    assert_eq!(store.format(), ArtifactFormat::Drl);

    let rules = store.load_rules().unwrap();
    assert_eq!(rules.len(), 3);
    assert_eq!(rules.rules()[0], rule("Breathing", "Apnoea", 1));
    assert_eq!(rules.rules()[2], rule("Fever", "Tachypnoea", 3));
}

#[test]
fn test_load_index_collects_categories() {
    let (_dir, store) = write_artifact("triage.drl", DRL_ARTIFACT);
    let index = store.load_index().unwrap();

    assert_eq!(index.rule_count(), 3);
    assert_eq!(index.len(), 2);

    let categories: Vec<u8> = index
        .categories("Tachypnoea")
        .unwrap()
        .iter()
        .map(|c| c.value())
        .collect();
    assert_eq!(categories, vec![3, 4]);
}

#[test]
fn test_static_load() {
    let (dir, _store) = write_artifact("triage.drl", DRL_ARTIFACT);
    let index = RuleStore::load(dir.path().join("triage.drl")).unwrap();
    assert!(index.contains("Apnoea"));
}

#[test]
fn test_unknown_color_is_blue() {
    let content = DRL_ARTIFACT.replace("\"Red\"", "\"Purple\"");
    let (_dir, store) = write_artifact("triage.drl", &content);

    let rules = store.load_rules().unwrap();
    assert_eq!(rules.rules()[0].category.value(), 5);
}

#[test]
fn test_non_rule_text_is_ignored() {
    let (_dir, store) = write_artifact("triage.drl", "// nothing to see here\n\nrandom words\n");
    assert!(store.load_rules().unwrap().is_empty());
}

// =============================================================================
// Record artifacts
// =============================================================================

#[test]
fn test_load_json_artifact() {
    let content = r#"{
  "version": 1,
  "rules": [
    {"id": 1, "flowchart": "Breathing", "symptom": "Apnoea", "category": 1, "color": "Red"},
    {"id": 2, "flowchart": "Breathing", "symptom": "Stridor", "category": 2, "color": "Orange"}
  ]
}"#;
    let (_dir, store) = write_artifact("triage.json", content);
    assert_eq!(store.format(), ArtifactFormat::Json);

    let rules = store.load_rules().unwrap();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules.rules()[1], rule("Breathing", "Stridor", 2));
}

#[test]
fn test_load_yaml_artifact() {
    let content = r#"version: 1
rules:
  - id: 1
    flowchart: Fever
    symptom: Rash
    category: 3
    color: Yellow
"#;
    let (_dir, store) = write_artifact("triage.yml", content);
    assert_eq!(store.format(), ArtifactFormat::Yaml);

    let index = store.load_index().unwrap();
    assert!(index.contains("Rash"));
}

#[test]
fn test_malformed_json_is_error() {
    let (_dir, store) = write_artifact("triage.json", "{ not json");
    assert!(matches!(
        store.load_rules(),
        Err(RepositoryError::JsonParse(_))
    ));
}

#[test]
fn test_out_of_range_category_is_error() {
    let content = r#"{"version": 1, "rules": [
        {"id": 1, "flowchart": "F", "symptom": "S", "category": 9, "color": "Red"}
    ]}"#;
    let (_dir, store) = write_artifact("triage.json", content);
    assert!(store.load_rules().is_err());
}

// =============================================================================
// Absence and listing
// =============================================================================

#[test]
fn test_missing_artifact_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = RuleStore::new(temp_dir.path().join("missing.drl"));

    assert!(!store.exists());
    assert!(store.load_rules().unwrap().is_empty());
    assert!(store.load_index().unwrap().is_empty());
    assert!(store.distinct_symptoms().unwrap().is_empty());
}

#[test]
fn test_distinct_symptoms_sorted() {
    let (_dir, store) = write_artifact("triage.drl", DRL_ARTIFACT);
    let symptoms: Vec<String> = store.distinct_symptoms().unwrap().into_iter().collect();
    assert_eq!(symptoms, vec!["Apnoea".to_string(), "Tachypnoea".to_string()]);
}

#[test]
fn test_distinct_symptoms_include_blocks_without_result() {
    let content = format!(
        "{}rule \"Rule_4_Rash\"\n    when\n        Symptom( name == \"Petechiae\" ) from $s\nend\n",
        DRL_ARTIFACT
    );
    let (_dir, store) = write_artifact("triage.drl", &content);

    assert_eq!(store.load_rules().unwrap().len(), 3);
    let symptoms: Vec<String> = store.distinct_symptoms().unwrap().into_iter().collect();
    assert_eq!(symptoms, vec!["Apnoea", "Petechiae", "Tachypnoea"]);
}

#[test]
fn test_explicit_format_overrides_extension() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("rules.txt");
    fs::write(&path, r#"{"version":1,"rules":[]}"#).unwrap();

    let store = RuleStore::with_format(&path, ArtifactFormat::Json);
    assert!(store.load_rules().unwrap().is_empty());
}

#[test]
fn test_store_picks_up_rewritten_artifact() {
    let (dir, store) = write_artifact("triage.drl", DRL_ARTIFACT);
    assert_eq!(store.load_index().unwrap().rule_count(), 3);

    fs::write(dir.path().join("triage.drl"), "").unwrap();
    assert_eq!(store.load_index().unwrap().rule_count(), 0);
}

#[test]
fn test_memory_repository() {
    let rules: RuleSet = vec![rule("Breathing", "Apnoea", 1)].into();
    let repo = MemoryRepository::new(rules.clone());

    assert_eq!(repo.load_rules().unwrap(), rules);
    assert!(repo.describe().contains("1 rules"));
    assert!(repo.distinct_symptoms().unwrap().contains("Apnoea"));
}
