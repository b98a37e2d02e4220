//! Triage Runtime - Classification engine for compiled triage rules
//!
//! This crate provides [`TriageEngine`], which loads a rule artifact once
//! and classifies patients against the resulting symptom index. Engines are
//! immutable and may be shared freely between threads.

pub mod engine;
pub mod error;
pub mod trace;

// Re-export main types
pub use engine::TriageEngine;
pub use error::{Result, RuntimeError};
pub use trace::{SymptomMatch, TriageTrace};
