//! `Workspace` backed by the system temporary directory

use std::path::PathBuf;

use crate::domain::ports::Workspace;
use crate::error::HarnessResult;

/// Creates persistent temp directories and UUID v4 suffixes.
///
/// Directories are never removed; the scaffold is handed to the caller.
#[derive(Debug, Clone, Default)]
pub struct TempWorkspace {
    parent: Option<PathBuf>,
}

impl TempWorkspace {
    /// Use the system temporary directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Create temp directories under `parent` instead
    pub fn in_dir(parent: impl Into<PathBuf>) -> Self {
        Self {
            parent: Some(parent.into()),
        }
    }
}

impl Workspace for TempWorkspace {
    fn create_temp_dir(&self) -> HarnessResult<PathBuf> {
        let parent = self.parent.clone().unwrap_or_else(std::env::temp_dir);
        let dir = tempfile::Builder::new()
            .prefix("ngharness-")
            .tempdir_in(parent)?;
        Ok(dir.keep())
    }

    fn unique_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}
