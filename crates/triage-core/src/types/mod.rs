//! Type definitions for the triage model

pub mod category;
pub mod index;
pub mod patient;
pub mod result;
pub mod rule;
pub mod token;

pub use category::{Category, TriageColor};
pub use index::SymptomIndex;
pub use patient::{Patient, Symptom};
pub use result::TriageResult;
pub use rule::{RuleSet, TriageRule};
pub use token::PositionedToken;
