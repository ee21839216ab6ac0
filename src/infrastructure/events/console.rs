//! Console Event Sink
//!
//! Human-readable progress lines. The final line of a successful run is
//! `The test project has been set up at: <path>`; editor integrations match
//! on that exact text.

use crate::domain::ports::{GenerateEvent, GenerateEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Prefix of the final announcement line
pub const ANNOUNCEMENT: &str = "The test project has been set up at:";

/// Event sink that prints progress to stdout and problems to stderr
pub struct ConsoleEventSink {
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
    verbose: u8,
}

impl ConsoleEventSink {
    pub fn stdio(verbose: u8) -> Self {
        Self::with_writers(io::stdout(), io::stderr(), verbose)
    }

    pub fn with_writers<O, E>(out: O, err: E, verbose: u8) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
            verbose,
        }
    }

    fn out(&self, line: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", line);
            let _ = out.flush();
        }
    }

    fn err(&self, line: &str) {
        if let Ok(mut err) = self.err.lock() {
            let _ = writeln!(err, "{}", line);
            let _ = err.flush();
        }
    }
}

impl GenerateEventSink for ConsoleEventSink {
    fn on_event(&self, event: GenerateEvent) {
        match event {
            GenerateEvent::Started {
                project_root,
                selected_count,
            } => self.out(&format!(
                "Generating test project for {} file(s) from {}",
                selected_count,
                project_root.display()
            )),

            GenerateEvent::CommandStarted { command_line, cwd } => {
                if self.verbose > 0 {
                    self.out(&format!("$ {}  (in {})", command_line, cwd.display()));
                } else {
                    self.out(&format!("Running {}", command_line));
                }
            }

            GenerateEvent::CommandOutput { stdout, stderr, .. } => {
                if !stdout.trim().is_empty() {
                    self.out(stdout.trim_end());
                }
                if !stderr.trim().is_empty() {
                    self.err(stderr.trim_end());
                }
            }

            GenerateEvent::ScaffoldCreated { path } => {
                self.out(&format!("Scaffold created at {}", path.display()))
            }

            GenerateEvent::ConfigWritten { path } => {
                if self.verbose > 0 {
                    self.out(&format!("Wrote {}", path.display()));
                }
            }

            GenerateEvent::FileCopied {
                source,
                destination,
            } => self.out(&format!(
                "Copying {} to {}",
                source.display(),
                destination.display()
            )),

            GenerateEvent::FileSkipped { path, reason } => {
                self.err(&format!("Skipping {}: {}", path.display(), reason))
            }

            GenerateEvent::StructureNormalized { moved } => self.out(&format!(
                "Flattened nested app directory ({} entries moved)",
                moved
            )),

            GenerateEvent::NormalizeFailed { path, error } => {
                self.err(&format!("Error moving {}: {}", path.display(), error))
            }

            GenerateEvent::InstallSkipped => self.out("Skipping dependency installation"),

            GenerateEvent::StubWritten { path } => {
                self.out(&format!("Created test stub {}", path.display()))
            }

            GenerateEvent::Completed { scaffold, .. } => {
                self.out(&format!("{} {}", ANNOUNCEMENT, scaffold.display()))
            }
        }
    }
}
