//! Common test utilities for ngharness CLI tests.
//!
//! - `TestEnv`: isolated project, home and temp directories plus CLI runners
//! - Fixtures: fake `npx`/`npm` scripts that stand in for the Node toolchain

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
