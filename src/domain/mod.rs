//! Domain Layer
//!
//! The harness-building logic. Everything that talks to external programs or
//! chooses temporary locations goes through a port so the pipeline can run
//! against fakes in tests.
//!
//! ## Structure
//!
//! - `ports/` - Interface definitions for infrastructure
//! - `services/` - Discovery, templating, import, normalization, stub generation
//! - `value_objects/` - Small validated types (file selection, imported files)

pub mod ports;
pub mod services;
pub mod value_objects;
