//! JSON Event Sink
//!
//! Outputs generate events as NDJSON for editor/automation consumption.

use crate::domain::ports::{GenerateEvent, GenerateEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

const COMMAND: &str = "generate";

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl GenerateEventSink for JsonEventSink {
    fn on_event(&self, event: GenerateEvent) {
        let json = match event {
            GenerateEvent::Started {
                project_root,
                selected_count,
            } => serde_json::json!({
                "event": "start",
                "command": COMMAND,
                "project_root": project_root.display().to_string(),
                "selected_count": selected_count,
            }),

            GenerateEvent::CommandStarted { command_line, cwd } => serde_json::json!({
                "event": "command_start",
                "command": COMMAND,
                "command_line": command_line,
                "cwd": cwd.display().to_string(),
            }),

            GenerateEvent::CommandOutput {
                command_line,
                stdout,
                stderr,
            } => serde_json::json!({
                "event": "command_output",
                "command": COMMAND,
                "command_line": command_line,
                "stdout": stdout,
                "stderr": stderr,
            }),

            GenerateEvent::ScaffoldCreated { path } => serde_json::json!({
                "event": "scaffold_created",
                "command": COMMAND,
                "path": path.display().to_string(),
            }),

            GenerateEvent::ConfigWritten { path } => serde_json::json!({
                "event": "config_written",
                "command": COMMAND,
                "path": path.display().to_string(),
            }),

            GenerateEvent::FileCopied {
                source,
                destination,
            } => serde_json::json!({
                "event": "item_copied",
                "command": COMMAND,
                "source": source.display().to_string(),
                "destination": destination.display().to_string(),
            }),

            GenerateEvent::FileSkipped { path, reason } => serde_json::json!({
                "event": "item_skipped",
                "command": COMMAND,
                "path": path.display().to_string(),
                "reason": reason,
            }),

            GenerateEvent::StructureNormalized { moved } => serde_json::json!({
                "event": "normalized",
                "command": COMMAND,
                "moved": moved,
            }),

            GenerateEvent::NormalizeFailed { path, error } => serde_json::json!({
                "event": "item_error",
                "command": COMMAND,
                "path": path.display().to_string(),
                "error": error,
            }),

            GenerateEvent::InstallSkipped => serde_json::json!({
                "event": "install_skipped",
                "command": COMMAND,
            }),

            GenerateEvent::StubWritten { path } => serde_json::json!({
                "event": "stub_written",
                "command": COMMAND,
                "path": path.display().to_string(),
            }),

            GenerateEvent::Completed {
                scaffold,
                imported_count,
                skipped_count,
                stub_count,
            } => {
                let status = if skipped_count == 0 { "success" } else { "partial" };
                serde_json::json!({
                    "event": "complete",
                    "command": COMMAND,
                    "status": status,
                    "scaffold": scaffold.display().to_string(),
                    "imported": imported_count,
                    "skipped": skipped_count,
                    "stubs": stub_count,
                })
            }
        };

        self.write_event(json);
    }
}
