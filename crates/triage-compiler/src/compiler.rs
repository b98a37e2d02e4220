//! Main compiler
//!
//! Runs the layout parser over a token source and writes the rule artifact.
//! Every call builds a fresh parser, so one compiler can be shared across
//! threads.

use crate::artifact::ArtifactWriter;
use crate::codegen;
use crate::error::{CompileError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use triage_core::{ArtifactFormat, PositionedToken, RuleSet};
use triage_parser::{LayoutGeometry, LayoutParser, TokenSource};

/// Compiler options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerOptions {
    /// Page geometry used by the layout parser
    pub geometry: LayoutGeometry,
    /// Artifact format; derived from the output extension when unset
    pub format: Option<ArtifactFormat>,
}

/// Rule compiler
#[derive(Debug, Clone, Default)]
pub struct RuleCompiler {
    options: CompilerOptions,
}

impl RuleCompiler {
    /// Create a new compiler with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new compiler with custom options
    pub fn with_options(options: CompilerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    /// Parse a token stream into rules without touching the disk
    pub fn compile_tokens(&self, tokens: &[PositionedToken]) -> RuleSet {
        LayoutParser::parse_all(self.options.geometry.clone(), tokens)
    }

    /// Format used when writing to `output`
    pub fn format_for(&self, output: &Path) -> ArtifactFormat {
        self.options
            .format
            .unwrap_or_else(|| ArtifactFormat::from_path(output))
    }

    /// Compile `source` and write the artifact to `output`
    ///
    /// Nothing is written when the source cannot be read. A failed write
    /// leaves any previous artifact in place.
    pub fn compile(&self, source: &dyn TokenSource, output: &Path) -> Result<RuleSet> {
        let tokens = source
            .read_tokens()
            .map_err(|e| CompileError::from_parse(source.describe(), e))?;

        let rules = self.compile_tokens(&tokens);
        let format = self.format_for(output);
        let contents = codegen::render(&rules, format)?;

        ArtifactWriter::write(output, &contents)?;

        tracing::info!("Generated {} rules to {}", rules.len(), output.display());

        Ok(rules)
    }
}
