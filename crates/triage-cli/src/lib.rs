//! Pediatric triage command-line interface
//!
//! Generates rule artifacts, reports their status and classifies patients
//! without any interactive prompts.

pub mod commands;
pub mod config;

pub use commands::TriageRequest;
pub use config::CliConfig;
