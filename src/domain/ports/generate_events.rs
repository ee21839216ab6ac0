//! Generate Event Port
//!
//! Provides an observable interface for the generate pipeline.
//! Enables console progress, JSON event streams, and test recording.

use std::path::PathBuf;

/// Event emitted during the generate pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateEvent {
    /// Pipeline started
    Started {
        project_root: PathBuf,
        selected_count: usize,
    },

    /// An external command is about to run
    CommandStarted { command_line: String, cwd: PathBuf },

    /// Captured output of a finished external command
    CommandOutput {
        command_line: String,
        stdout: String,
        stderr: String,
    },

    /// The scaffold project exists at its final (renamed) path
    ScaffoldCreated { path: PathBuf },

    /// A configuration or bootstrap file was written
    ConfigWritten { path: PathBuf },

    /// A selected file or one of its siblings was copied
    FileCopied {
        source: PathBuf,
        destination: PathBuf,
    },

    /// A selected file was not imported
    FileSkipped { path: PathBuf, reason: String },

    /// The nested `src/app/src/app` directory was flattened
    StructureNormalized { moved: usize },

    /// A child of the nested directory could not be moved
    NormalizeFailed { path: PathBuf, error: String },

    /// Dependency installation was skipped by request
    InstallSkipped,

    /// A stub spec file was written
    StubWritten { path: PathBuf },

    /// Pipeline completed
    Completed {
        scaffold: PathBuf,
        imported_count: usize,
        skipped_count: usize,
        stub_count: usize,
    },
}

/// Trait for receiving generate events
///
/// Implementations:
/// - ConsoleEventSink: progress lines in the terminal
/// - JsonEventSink: NDJSON event stream for editors/CI
/// - NoopEventSink: silent operation
pub trait GenerateEventSink: Send + Sync {
    /// Handle a generate event
    fn on_event(&self, event: GenerateEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl GenerateEventSink for NoopEventSink {
    fn on_event(&self, _event: GenerateEvent) {}
}
