//! Application Layer
//!
//! Use cases that orchestrate the harness pipeline.
//! This layer:
//! - Depends on Domain layer (services, ports)
//! - Does NOT contain templating or file rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `GenerateUseCase` - scaffold, patch, import, normalize, install, stub

pub mod generate;

pub use generate::{GenerateOptions, GenerateResult, GenerateUseCase};
