//! Angular source discovery
//!
//! Walks the whole tree, including hidden and build directories such as
//! `node_modules`. Callers that want a narrower list filter the result.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HarnessError, HarnessResult};

/// File name suffixes that mark a component or service source file
pub const ANGULAR_SUFFIXES: &[&str] = &[".component.ts", ".service.ts"];

/// Whether `file_name` is a component or service source file
pub fn is_angular_source(file_name: &str) -> bool {
    has_angular_suffix(OsStr::new(file_name))
}

/// Suffix check on the raw name, so names that are not valid UTF-8 still match
fn has_angular_suffix(file_name: &OsStr) -> bool {
    let bytes = file_name.as_encoded_bytes();
    ANGULAR_SUFFIXES
        .iter()
        .any(|suffix| bytes.ends_with(suffix.as_bytes()))
}

/// Find every component/service source file under `root`.
///
/// Within a directory, matching files are listed before descending into
/// subdirectories. Results are neither sorted nor deduplicated. Directory
/// symlinks are not followed.
pub fn discover_angular_files(root: &Path) -> HarnessResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(HarnessError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut found = Vec::new();
    walk(root, &mut found)?;
    Ok(found)
}

fn walk(dir: &Path, found: &mut Vec<PathBuf>) -> HarnessResult<()> {
    let mut subdirs = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let path = entry.path();

        if file_type.is_dir() {
            subdirs.push(path);
        } else if has_angular_suffix(&entry.file_name()) {
            found.push(path);
        }
    }

    for subdir in subdirs {
        walk(&subdir, found)?;
    }

    Ok(())
}
