//! Interactive file picker for `generate` when no files are given.

use std::path::{Path, PathBuf};

use anyhow::Result;
use dialoguer::MultiSelect;
use ngharness::HarnessError;

/// Label shown for a candidate: its path relative to the project root
fn display_label(project_root: &Path, path: &Path) -> String {
    path.strip_prefix(project_root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Let the user tick files from `candidates`.
///
/// Nothing is pre-selected. An empty selection is reported as cancelled.
pub fn select_files(project_root: &Path, candidates: &[PathBuf]) -> Result<Vec<PathBuf>> {
    if candidates.is_empty() {
        return Err(HarnessError::SelectionCancelled.into());
    }

    let items: Vec<String> = candidates
        .iter()
        .map(|p| display_label(project_root, p))
        .collect();

    println!("\n📋 Select files to test (use space to toggle, enter to confirm):");
    let selection = MultiSelect::new().items(&items).interact()?;

    if selection.is_empty() {
        return Err(HarnessError::SelectionCancelled.into());
    }

    Ok(selection.into_iter().map(|i| candidates[i].clone()).collect())
}
