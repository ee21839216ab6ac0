//! File importer
//!
//! Copies selected sources into `<scaffold>/src/app`, mirroring each file's
//! path relative to the source project root, together with its same-stem
//! `.html` template and `.scss` stylesheet when those exist.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::ports::{GenerateEvent, GenerateEventSink};
use crate::domain::value_objects::{ImportedFile, SkippedFile};
use crate::error::HarnessResult;

/// Sibling extensions copied along with a selected file
pub const SIBLING_EXTENSIONS: &[&str] = &["html", "scss"];

/// Outcome of importing a selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: Vec<ImportedFile>,
    pub skipped: Vec<SkippedFile>,
}

/// Copies selected files from a source project into a scaffold's app directory
pub struct FileImporter<'a> {
    project_root: &'a Path,
    app_dir: &'a Path,
}

impl<'a> FileImporter<'a> {
    pub fn new(project_root: &'a Path, app_dir: &'a Path) -> Self {
        Self {
            project_root,
            app_dir,
        }
    }

    /// Import every selected file in order.
    ///
    /// Missing files and files outside the project root are reported and
    /// skipped; any other I/O failure aborts the import.
    pub fn import_all(
        &self,
        selected: &[PathBuf],
        sink: &dyn GenerateEventSink,
    ) -> HarnessResult<ImportReport> {
        let mut report = ImportReport::default();

        for path in selected {
            match self.import_one(path, sink)? {
                Ok(imported) => report.imported.push(imported),
                Err(skipped) => {
                    sink.on_event(GenerateEvent::FileSkipped {
                        path: skipped.path.clone(),
                        reason: skipped.reason.clone(),
                    });
                    report.skipped.push(skipped);
                }
            }
        }

        Ok(report)
    }

    fn import_one(
        &self,
        path: &Path,
        sink: &dyn GenerateEventSink,
    ) -> HarnessResult<Result<ImportedFile, SkippedFile>> {
        if path.as_os_str().is_empty() || !path.is_file() {
            return Ok(Err(SkippedFile {
                path: path.to_path_buf(),
                reason: "not found".to_string(),
            }));
        }

        let relative = match path.strip_prefix(self.project_root) {
            Ok(relative) => relative,
            Err(_) => {
                return Ok(Err(SkippedFile {
                    path: path.to_path_buf(),
                    reason: format!("outside project root {}", self.project_root.display()),
                }))
            }
        };

        let destination = self.app_dir.join(relative);
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }
        copy_reporting(path, &destination, sink)?;

        for extension in SIBLING_EXTENSIONS {
            let sibling = path.with_extension(extension);
            if sibling.is_file() {
                copy_reporting(&sibling, &destination.with_extension(extension), sink)?;
            }
        }

        Ok(Ok(ImportedFile {
            source: path.to_path_buf(),
            destination,
        }))
    }
}

fn copy_reporting(
    source: &Path,
    destination: &Path,
    sink: &dyn GenerateEventSink,
) -> HarnessResult<()> {
    sink.on_event(GenerateEvent::FileCopied {
        source: source.to_path_buf(),
        destination: destination.to_path_buf(),
    });
    fs::copy(source, destination)?;
    Ok(())
}
