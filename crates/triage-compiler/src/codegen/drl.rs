//! DRL generator
//!
//! Emits the legacy declarative rule text. Each rule matches a patient
//! holding a symptom with the exact name and inserts the triage result for
//! the rule's color. Rule ids count rules, not flowcharts.

use std::fmt::Write;
use triage_core::artifact::drl_escape;
use triage_core::{RuleSet, TriageRule};

const HEADER: &str = "package generated_rules;

import com.triage.model.Patient;
import com.triage.model.Symptom;
import com.triage.model.TriageResult;

";

/// DRL text generator
pub struct DrlGenerator;

impl DrlGenerator {
    /// Render the whole artifact
    pub fn generate(rules: &RuleSet) -> String {
        let mut drl = String::from(HEADER);
        for (i, rule) in rules.iter().enumerate() {
            Self::write_rule(&mut drl, i + 1, rule);
        }
        drl
    }

    /// Render one rule block followed by a blank line
    pub fn write_rule(out: &mut String, id: usize, rule: &TriageRule) {
        // Writing to a String cannot fail
        let _ = write!(
            out,
            "rule \"Rule_{id}_{flowchart}\"\n\
             \x20   when\n\
             \x20       $p : Patient( $s : symptoms )\n\
             \x20       Symptom( name == \"{symptom}\" ) from $s\n\
             \x20   then\n\
             \x20       insert(new TriageResult(\"{color}\"));\n\
             end\n\n",
            id = id,
            flowchart = drl_escape(&rule.flowchart),
            symptom = drl_escape(&rule.symptom),
            color = rule.color(),
        );
    }
}
