//! Error types for ngharness
//!
//! Library code returns `HarnessError`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ngharness operations
pub type HarnessResult<T> = Result<T, HarnessError>;

/// Main error type for ngharness operations
#[derive(Error, Debug)]
pub enum HarnessError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// External program could not be started at all
    #[error("failed to spawn '{program}': {source}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// External program ran but exited unsuccessfully
    #[error("command failed: {program} {args}{}{}", format_code(.code), format_stderr(.stderr))]
    CommandFailed {
        program: String,
        args: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The scaffolding command succeeded but produced no project directory
    #[error("scaffold command did not create {path}")]
    ScaffoldMissing { path: PathBuf },

    /// angular.json could not be patched
    #[error("invalid manifest {file}: {message}")]
    ManifestInvalid { file: PathBuf, message: String },

    /// `--pick` indices could not be resolved against the discovered list
    #[error("invalid selection '{input}': {message}")]
    InvalidSelection { input: String, message: String },

    /// Configuration file could not be parsed
    #[error("invalid config {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Interactive selection was dismissed
    #[error("selection cancelled")]
    SelectionCancelled,
}

fn format_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" (exit {})", code),
        None => " (terminated by signal)".to_string(),
    }
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\nstderr:\n{}", trimmed)
    }
}
