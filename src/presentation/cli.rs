//! CLI Argument Parsing
//!
//! Global flags (`--json`, `--verbose`) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// ngharness - scaffold a throwaway Angular test harness
#[derive(Parser, Debug)]
#[command(name = "ngharness")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Also print each command's working directory and every config file written
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every *.component.ts / *.service.ts under a project as a JSON array
    List {
        /// Root of the Angular project to scan
        project_path: PathBuf,
    },

    /// Scaffold a test project around the selected files
    Generate {
        /// Root of the Angular project the files come from
        project_path: PathBuf,

        /// Component/service files to import
        files: Vec<PathBuf>,

        /// Comma-separated 1-based indices into the `list` output (e.g. "1,3")
        #[arg(long, value_name = "INDICES")]
        pick: Option<String>,

        /// Do not run `npm install`
        #[arg(long)]
        skip_install: bool,

        /// Name passed to `ng new` (default: test-project)
        #[arg(long)]
        project_name: Option<String>,
    },
}
