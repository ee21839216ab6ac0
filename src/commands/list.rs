//! List command handler
//!
//! Prints every component and service file under a project as a JSON array
//! of path strings, in discovery order.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use ngharness::discover_angular_files;

use super::paths::absolutize;

pub fn cmd_list(project_path: &Path, json: bool) -> Result<()> {
    let root = absolutize(project_path)?;
    let files = discover_angular_files(&root)
        .with_context(|| format!("failed to list files under {}", root.display()))?;

    if json {
        crate::ui::json::emit(list_event(&files))?;
    } else {
        println!("{}", serde_json::to_string(&path_strings(&files))?);
    }
    Ok(())
}

fn path_strings(files: &[PathBuf]) -> Vec<String> {
    files.iter().map(|p| p.display().to_string()).collect()
}

fn list_event(files: &[PathBuf]) -> serde_json::Value {
    serde_json::json!({
        "event": "data",
        "command": "list",
        "count": files.len(),
        "files": path_strings(files),
    })
}
