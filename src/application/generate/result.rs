//! Generate Result

use std::path::PathBuf;

use crate::domain::value_objects::{ImportedFile, SkippedFile};

/// Result of a generate run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    /// Final scaffold directory (`<tmp>/<name>-<id>`)
    pub scaffold: PathBuf,
    /// Selected files copied into the scaffold, at their post-normalization paths
    pub imported: Vec<ImportedFile>,
    /// Selected files that were not copied
    pub skipped: Vec<SkippedFile>,
    /// Generated spec files
    pub stubs: Vec<PathBuf>,
    /// Whether a nested `src/app/src/app` was flattened
    pub normalized: bool,
}

impl GenerateResult {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}
