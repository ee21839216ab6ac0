//! Configuration module for ngharness
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (NGHARNESS_*)
//! 3. Project config (`<project>/ngharness.toml`)
//! 4. User config (`<config dir>/ngharness/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{with_env_overrides_from, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, InstallConfig, KarmaConfig, ScaffoldConfig};
