//! Atomic artifact writer
//!
//! Artifacts are written to a temporary file beside the destination and
//! renamed into place, so a reader sees either the previous artifact or the
//! complete new one. A failed write leaves the temporary file to be removed
//! on drop and the destination untouched.

use crate::error::{CompileError, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes rule artifacts to disk
pub struct ArtifactWriter;

impl ArtifactWriter {
    /// Replace `path` with `contents`, creating missing parent directories
    pub fn write(path: &Path, contents: &str) -> Result<()> {
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        fs::create_dir_all(parent).map_err(|e| CompileError::write_failure(path, e))?;

        let mut file =
            NamedTempFile::new_in(parent).map_err(|e| CompileError::write_failure(path, e))?;
        file.write_all(contents.as_bytes())
            .and_then(|_| file.as_file().sync_all())
            .map_err(|e| CompileError::write_failure(path, e))?;

        file.persist(path)
            .map_err(|e| CompileError::write_failure(path, e.error))?;

        Ok(())
    }
}
