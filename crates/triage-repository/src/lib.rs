//! Repository layer for the triage engine
//!
//! This crate loads compiled rule artifacts and exposes them as symptom
//! indexes. It never re-derives rules from the guideline layout at runtime:
//! the artifact is the only source of truth.
//!
//! # Features
//!
//! - **Rule store**: read DRL or record artifacts from disk
//! - **Graceful absence**: a missing artifact loads as an empty index
//! - **Freshness**: compare an artifact against its token source
//!
//! # Quick Start
//!
//! ```no_run
//! use triage_repository::{is_outdated, RuleStore};
//!
//! if is_outdated("spec/icts_tokens.json", "generated_rules/triage.drl") {
//!     println!("Rules are outdated, please regenerate");
//! }
//!
//! let index = RuleStore::load("generated_rules/triage.drl").unwrap();
//! println!("{} symptoms loaded", index.len());
//! ```

pub mod config;
pub mod drl;
pub mod error;
pub mod file_system;
pub mod freshness;
pub mod memory;
pub mod records;
pub mod traits;

// Re-exports - Configuration
pub use config::{RepositoryConfig, DEFAULT_ARTIFACT_PATH, DEFAULT_SOURCE_PATH};

// Re-exports - Error
pub use error::{RepositoryError, RepositoryResult};

// Re-exports - Repositories
pub use file_system::RuleStore;
pub use freshness::{artifact_status, is_outdated, ArtifactStatus};
pub use memory::MemoryRepository;
pub use traits::RuleRepository;
