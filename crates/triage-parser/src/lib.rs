//! Triage Parser - positioned text to triage rules
//!
//! This crate rebuilds the guideline's flowchart structure from a flat stream
//! of positioned text tokens:
//! - [`source`]: where tokens come from (token dump files, in-memory lists)
//! - [`layout`]: the block-accumulation state machine and its page geometry

pub mod error;
pub mod layout;
pub mod source;

// Re-export main parser types
pub use error::{ParseError, Result};
pub use layout::{LayoutGeometry, LayoutParser, ParseState};
pub use source::{TokenDump, TokenDumpFile, TokenSource};
