//! Structure normalizer
//!
//! Importing from an Angular workspace root mirrors `src/app/...` under the
//! scaffold's own `src/app`, producing `src/app/src/app/...`. This flattens
//! that nesting back into `src/app`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::ports::{GenerateEvent, GenerateEventSink};
use crate::error::HarnessResult;

/// Staging name the nested app directory is moved to while flattening
const STAGING_DIR: &str = ".ngharness-flatten";

/// What a normalization pass did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeOutcome {
    /// Whether a nested app directory was found
    pub flattened: bool,
    /// Number of children moved up
    pub moved: usize,
    /// Children that could not be moved
    pub failed: Vec<PathBuf>,
}

/// Flattens `<app>/src/app` into `<app>`
pub struct StructureNormalizer<'a> {
    app_dir: &'a Path,
}

impl<'a> StructureNormalizer<'a> {
    pub fn new(app_dir: &'a Path) -> Self {
        Self { app_dir }
    }

    fn nested_src(&self) -> PathBuf {
        self.app_dir.join("src")
    }

    fn nested_dir(&self) -> PathBuf {
        self.nested_src().join("app")
    }

    /// Move every child of the nested app directory up one level.
    ///
    /// Same-named destinations are replaced. A child that fails to move is
    /// reported and the rest are still moved. Other entries of `<app>/src`
    /// (for example an imported `src/lib`) are left in place, and `<app>/src`
    /// is only removed once empty. No-op when there is no nested directory.
    pub fn normalize(&self, sink: &dyn GenerateEventSink) -> HarnessResult<NormalizeOutcome> {
        self.normalize_with(sink, replace_with)
    }

    fn normalize_with<F>(
        &self,
        sink: &dyn GenerateEventSink,
        move_entry: F,
    ) -> HarnessResult<NormalizeOutcome>
    where
        F: Fn(&Path, &Path) -> io::Result<()>,
    {
        if !self.nested_dir().is_dir() {
            return Ok(NormalizeOutcome::default());
        }

        // Move `<app>/src/app` aside so a child named `src` can land on `<app>/src`.
        let staging = self.app_dir.join(STAGING_DIR);
        if staging.exists() {
            fs::remove_dir_all(&staging)?;
        }
        fs::rename(self.nested_dir(), &staging)?;
        remove_if_empty(&self.nested_src())?;

        let mut outcome = NormalizeOutcome {
            flattened: true,
            ..Default::default()
        };

        for entry in fs::read_dir(&staging)? {
            let entry = entry?;
            let source = entry.path();
            let destination = self.app_dir.join(entry.file_name());

            let moved = if destination == self.nested_src() && destination.is_dir() {
                merge_into(&source, &destination, &move_entry)
            } else {
                move_entry(&source, &destination)
            };

            match moved {
                Ok(()) => outcome.moved += 1,
                Err(e) => {
                    sink.on_event(GenerateEvent::NormalizeFailed {
                        path: source.clone(),
                        error: e.to_string(),
                    });
                    outcome.failed.push(source);
                }
            }
        }

        fs::remove_dir_all(&staging)?;
        remove_if_empty(&self.nested_src())?;

        sink.on_event(GenerateEvent::StructureNormalized {
            moved: outcome.moved,
        });
        Ok(outcome)
    }

    /// Where a path recorded before normalization lives afterwards
    pub fn relocate(&self, path: &Path) -> PathBuf {
        match path.strip_prefix(self.nested_dir()) {
            Ok(rest) => self.app_dir.join(rest),
            Err(_) => path.to_path_buf(),
        }
    }
}

fn replace_with(source: &Path, destination: &Path) -> io::Result<()> {
    match fs::symlink_metadata(destination) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(destination)?,
        Ok(_) => fs::remove_file(destination)?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }
    fs::rename(source, destination)
}

/// Move the children of `source` into the existing directory `destination`
fn merge_into<F>(source: &Path, destination: &Path, move_entry: &F) -> io::Result<()>
where
    F: Fn(&Path, &Path) -> io::Result<()>,
{
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        move_entry(&entry.path(), &destination.join(entry.file_name()))?;
    }
    fs::remove_dir(source)
}

fn remove_if_empty(dir: &Path) -> io::Result<()> {
    if dir.is_dir() && fs::read_dir(dir)?.next().is_none() {
        fs::remove_dir(dir)?;
    }
    Ok(())
}
