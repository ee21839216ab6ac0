//! ngharness CLI - scaffold an Angular test harness
//!
//! Usage: ngharness <COMMAND>
//!
//! Commands:
//!   list      Print component and service files as a JSON array
//!   generate  Scaffold a test project around selected files

use clap::Parser;

use ngharness::presentation::cli::{Cli, Commands};

mod commands;
mod ui;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    let result = match cli.command {
        Commands::List { project_path } => commands::list::cmd_list(&project_path, json),
        Commands::Generate {
            project_path,
            files,
            pick,
            skip_install,
            project_name,
        } => commands::generate::cmd_generate(
            commands::generate::GenerateArgs {
                project_path,
                files,
                pick,
                skip_install,
                project_name,
            },
            json,
            cli.verbose,
        ),
    };

    if let Err(e) = result {
        ui::error::print_error(&e, json);
        std::process::exit(1);
    }
}
