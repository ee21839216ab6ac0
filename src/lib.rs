//! ngharness - Angular test-harness scaffolder
//!
//! Builds a throwaway Angular CLI project around a handful of components and
//! services picked from an existing project, wires up Karma, and drops a
//! minimal spec next to each imported file so it can be tested in isolation.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{GenerateOptions, GenerateResult, GenerateUseCase};
pub use config::Config;
pub use domain::services::discover_angular_files;
pub use error::{HarnessError, HarnessResult};
