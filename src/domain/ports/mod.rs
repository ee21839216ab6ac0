//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod generate_events;
pub mod workspace;

pub use command_runner::{CommandOutput, CommandRunner, Invocation};
pub use generate_events::{GenerateEvent, GenerateEventSink, NoopEventSink};
pub use workspace::Workspace;
