//! Generate Options

use std::path::PathBuf;

use crate::config::Config;

/// Options for the generate use case
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Source project the selected files are imported from
    pub project_root: PathBuf,
    /// Files to import, in order (duplicates allowed)
    pub selected: Vec<PathBuf>,
    /// Skip both `npm install` passes
    pub skip_install: bool,
    /// Tool locations, project name and Karma settings
    pub config: Config,
}

impl GenerateOptions {
    pub fn new(project_root: impl Into<PathBuf>, selected: Vec<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            selected,
            skip_install: false,
            config: Config::default(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn with_skip_install(mut self, skip_install: bool) -> Self {
        self.skip_install = skip_install;
        self
    }

    pub fn project_name(&self) -> &str {
        &self.config.scaffold.project_name
    }
}
