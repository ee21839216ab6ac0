//! Workspace port - where scaffold projects are created and how they are named

use std::path::PathBuf;

use crate::error::HarnessResult;

/// Supplies the temporary parent directory and the unique suffix for a scaffold.
///
/// Tests inject a fixed directory and id to make scaffold paths predictable.
pub trait Workspace {
    /// Create a fresh, empty directory that outlives this process.
    fn create_temp_dir(&self) -> HarnessResult<PathBuf>;

    /// A new identifier appended to the scaffold directory name.
    fn unique_id(&self) -> String;
}

impl<T: Workspace + ?Sized> Workspace for &T {
    fn create_temp_dir(&self) -> HarnessResult<PathBuf> {
        (**self).create_temp_dir()
    }

    fn unique_id(&self) -> String {
        (**self).unique_id()
    }
}
