//! Event Sink Implementations
//!
//! Provides concrete implementations of GenerateEventSink:
//! - ConsoleEventSink: human-readable progress lines
//! - JsonEventSink: NDJSON output for editors/automation

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
