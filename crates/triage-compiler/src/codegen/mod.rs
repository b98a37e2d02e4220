//! Code generation module
//!
//! Renders a rule set into the text of a rule artifact.

pub mod drl;
pub mod records;

pub use drl::DrlGenerator;
pub use records::RecordGenerator;

use crate::error::Result;
use triage_core::{ArtifactFormat, RuleSet};

/// Render rules in the given artifact format
pub fn render(rules: &RuleSet, format: ArtifactFormat) -> Result<String> {
    match format {
        ArtifactFormat::Drl => Ok(DrlGenerator::generate(rules)),
        ArtifactFormat::Json => RecordGenerator::json(rules),
        ArtifactFormat::Yaml => RecordGenerator::yaml(rules),
    }
}
