//! DRL artifact reader
//!
//! Recovers rules from legacy rule text by scanning lines for the literal
//! markers the compiler writes. No DRL grammar is parsed: anything that does
//! not carry a marker is skipped.

use triage_core::artifact::{
    drl_unescape, DRL_RESULT_MARKER, DRL_RULE_MARKER, DRL_SYMPTOM_MARKER,
};
use std::collections::BTreeSet;
use triage_core::{RuleSet, TriageColor, TriageRule};

/// Scan DRL text for rules
///
/// Symptom names come from `Symptom( name == "..." )` lines, categories from
/// the `insert(new TriageResult("..."))` line of the same block and flowchart
/// names from the rule header. Unknown color names map to Blue.
pub fn read_rules(content: &str) -> RuleSet {
    let mut rules = RuleSet::new();
    let mut flowchart = String::new();
    let mut pending: Vec<String> = Vec::new();

    for line in content.lines().map(str::trim) {
        if let Some(header) = line.strip_prefix(DRL_RULE_MARKER) {
            flowchart = flowchart_from_header(header);
            pending.clear();
        } else if let Some(symptom) = symptom_name(line) {
            pending.push(symptom);
        } else if let Some(color) = result_color(line) {
            let category = color.category();
            rules.extend(
                pending
                    .drain(..)
                    .filter_map(|symptom| TriageRule::new(flowchart.as_str(), symptom, category).ok()),
            );
        } else if line == "end" {
            pending.clear();
        }
    }

    rules
}

/// Every symptom name on a marker line, sorted
///
/// Unlike [`read_rules`], a symptom is listed even when its block carries no
/// result line.
pub fn symptom_names(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .filter_map(|line| symptom_name(line.trim()))
        .collect()
}

/// Name between the symptom marker and the last quote on the line
pub fn symptom_name(line: &str) -> Option<String> {
    if !line.starts_with(DRL_SYMPTOM_MARKER) {
        return None;
    }
    let start = DRL_SYMPTOM_MARKER.len();
    let end = line.rfind('"')?;
    if end <= start {
        return None;
    }
    Some(drl_unescape(&line[start..end]))
}

fn result_color(line: &str) -> Option<TriageColor> {
    let at = line.find(DRL_RESULT_MARKER)?;
    let rest = &line[at + DRL_RESULT_MARKER.len()..];
    let end = rest.find('"')?;
    Some(TriageColor::from_name(&rest[..end]))
}

/// `<id>_<flowchart>"` → flowchart
fn flowchart_from_header(header: &str) -> String {
    let header = header.strip_suffix('"').unwrap_or(header);
    let name = header
        .split_once('_')
        .map(|(_, name)| name)
        .unwrap_or_default();
    drl_unescape(name)
}
