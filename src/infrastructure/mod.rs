//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles process spawning, temporary directories and output.
//!
//! ## Structure
//!
//! - `process/` - `CommandRunner` backed by `std::process`
//! - `workspace/` - `Workspace` backed by `tempfile` and `uuid`
//! - `events/` - `GenerateEventSink` implementations (console, NDJSON)

pub mod events;
pub mod process;
pub mod workspace;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use process::SystemCommandRunner;
pub use workspace::TempWorkspace;
