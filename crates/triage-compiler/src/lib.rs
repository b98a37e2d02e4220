//! Triage Compiler - token stream to rule artifact
//!
//! This crate drives the layout parser over a full token stream and persists
//! the resulting rules as a rule artifact.

pub mod artifact;
pub mod codegen;
pub mod compiler;
pub mod error;

// Re-export main types
pub use artifact::ArtifactWriter;
pub use codegen::{DrlGenerator, RecordGenerator};
pub use compiler::{CompilerOptions, RuleCompiler};
pub use error::{CompileError, Result};
pub use triage_core::ArtifactFormat;
