//! Triage Core - Core types and definitions for the pediatric triage engine
//!
//! This crate provides the fundamental types shared by every other crate:
//! - Positioned tokens read from the guideline document
//! - Triage categories, colors and results
//! - Compiled rules and the symptom index built from them
//! - Patient and symptom records
//! - Rule artifact formats shared by the compiler and the rule store
//! - Error types

pub mod artifact;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use artifact::ArtifactFormat;
pub use error::{CoreError, Result};
pub use types::{
    Category, Patient, PositionedToken, RuleSet, Symptom, SymptomIndex, TriageColor,
    TriageResult, TriageRule,
};
