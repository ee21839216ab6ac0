use std::path::PathBuf;

/// A selected file that now lives inside the scaffold project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedFile {
    /// Path in the source project
    pub source: PathBuf,
    /// Path inside `<scaffold>/src/app`
    pub destination: PathBuf,
}

/// A selected file the importer did not copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}
