//! Generate command handler
//!
//! Resolves the file selection (positional paths, `--pick` indices, or an
//! interactive picker), loads configuration, and runs the generate pipeline.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use is_terminal::IsTerminal;

use ngharness::config::Config;
use ngharness::discover_angular_files;
use ngharness::domain::ports::GenerateEventSink;
use ngharness::domain::value_objects::IndexSelection;
use ngharness::infrastructure::{ConsoleEventSink, JsonEventSink};
use ngharness::GenerateOptions;

use super::paths::absolutize;
use crate::ui::output::print_config_warnings;

/// Arguments of `ngharness generate`
#[derive(Debug)]
pub struct GenerateArgs {
    pub project_path: PathBuf,
    pub files: Vec<PathBuf>,
    pub pick: Option<String>,
    pub skip_install: bool,
    pub project_name: Option<String>,
}

pub fn cmd_generate(args: GenerateArgs, json: bool, verbose: u8) -> Result<()> {
    let project_root = absolutize(&args.project_path)?;
    let config = load_config(&project_root, args.project_name, json)?;

    let mut selected = args
        .files
        .iter()
        .map(|f| absolutize(f))
        .collect::<std::io::Result<Vec<_>>>()?;

    if let Some(pick) = &args.pick {
        let candidates = discover_angular_files(&project_root)?;
        selected.extend(IndexSelection::parse(pick)?.resolve(&candidates)?);
    } else if selected.is_empty() && !json && std::io::stdin().is_terminal() {
        let candidates = discover_angular_files(&project_root)?;
        selected = crate::ui::select::select_files(&project_root, &candidates)?;
    }

    let options = GenerateOptions::new(project_root, selected)
        .with_config(config)
        .with_skip_install(args.skip_install);

    let sink: Box<dyn GenerateEventSink> = if json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdio(verbose))
    };

    let use_case = ngharness::presentation::factory::create_generate_use_case();
    use_case
        .execute(&options, sink.as_ref())
        .context("failed to generate test project")?;
    Ok(())
}

/// Project file, user file or defaults, then `NGHARNESS_*`, then CLI flags
fn load_config(project_root: &Path, project_name: Option<String>, json: bool) -> Result<Config> {
    let (config, loaded) = Config::load_or_default(Some(project_root))?;
    if let Some((path, warnings)) = loaded {
        print_config_warnings(&path, &warnings, json);
    }

    let mut config = config.with_env_overrides();
    if let Some(name) = project_name {
        config.scaffold.project_name = name;
    }
    Ok(config)
}
