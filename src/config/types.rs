//! Configuration type definitions

use std::path::Path;

use serde::Deserialize;

use crate::error::HarnessResult;

use super::loader::{self, ConfigWarning};

/// Settings for the `ng new` invocation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScaffoldConfig {
    #[serde(default = "default_npx")]
    pub npx: String,

    #[serde(default = "default_cli_package")]
    pub cli_package: String,

    #[serde(default = "default_project_name")]
    pub project_name: String,

    /// Appended after `--minimal`
    #[serde(default)]
    pub extra_args: Vec<String>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            npx: default_npx(),
            cli_package: default_cli_package(),
            project_name: default_project_name(),
            extra_args: Vec::new(),
        }
    }
}

fn default_npx() -> String {
    let program = if cfg!(windows) { "npx.cmd" } else { "npx" };
    program.to_string()
}

fn default_cli_package() -> String {
    "@angular/cli".to_string()
}

fn default_project_name() -> String {
    "test-project".to_string()
}

/// Settings for the two `npm install` passes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InstallConfig {
    #[serde(default = "default_npm")]
    pub npm: String,

    #[serde(default = "default_dev_dependencies")]
    pub dev_dependencies: Vec<String>,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            npm: default_npm(),
            dev_dependencies: default_dev_dependencies(),
        }
    }
}

fn default_npm() -> String {
    let program = if cfg!(windows) { "npm.cmd" } else { "npm" };
    program.to_string()
}

fn default_dev_dependencies() -> Vec<String> {
    [
        "karma",
        "karma-chrome-launcher",
        "karma-coverage",
        "karma-jasmine",
        "karma-jasmine-html-reporter",
        "@types/jasmine",
        "@types/node",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Values substituted into `karma.conf.js`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KarmaConfig {
    #[serde(default = "default_karma_port")]
    pub port: u16,

    #[serde(default = "default_browser")]
    pub browser: String,

    #[serde(default)]
    pub single_run: bool,
}

impl Default for KarmaConfig {
    fn default() -> Self {
        Self {
            port: default_karma_port(),
            browser: default_browser(),
            single_run: false,
        }
    }
}

fn default_karma_port() -> u16 {
    9876
}

fn default_browser() -> String {
    "Chrome".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scaffold: ScaffoldConfig,

    #[serde(default)]
    pub install: InstallConfig,

    #[serde(default)]
    pub karma: KarmaConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> HarnessResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> HarnessResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults.
    ///
    /// Returns the path that was actually read alongside its warnings.
    pub fn load_or_default(
        project_root: Option<&Path>,
    ) -> HarnessResult<(Self, Option<(std::path::PathBuf, Vec<ConfigWarning>)>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (NGHARNESS_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides_from(self, |key| std::env::var(key).ok())
    }
}
