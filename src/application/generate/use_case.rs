//! Generate Use Case
//!
//! Orchestrates the harness flow:
//! 1. Scaffold a minimal project with the Angular CLI and give it a unique name
//! 2. Patch its configuration for Karma
//! 3. Import the selected files (plus template/style siblings)
//! 4. Flatten an accidental `src/app/src/app` nesting
//! 5. Install dependencies
//! 6. Write stub specs
//!
//! Any command failure or unexpected I/O error aborts the run. Nothing
//! already created is cleaned up.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::ports::{
    CommandOutput, CommandRunner, GenerateEvent, GenerateEventSink, Invocation, Workspace,
};
use crate::domain::services::{write_stub, ConfigPatcher, FileImporter, StructureNormalizer};
use crate::domain::value_objects::ImportedFile;
use crate::error::{HarnessError, HarnessResult};

use super::options::GenerateOptions;
use super::result::GenerateResult;

/// Generate use case - parameterized by its process runner and workspace
pub struct GenerateUseCase<R, W>
where
    R: CommandRunner,
    W: Workspace,
{
    runner: R,
    workspace: W,
}

impl<R, W> GenerateUseCase<R, W>
where
    R: CommandRunner,
    W: Workspace,
{
    pub fn new(runner: R, workspace: W) -> Self {
        Self { runner, workspace }
    }

    /// Run the whole pipeline, reporting progress to `sink`
    pub fn execute(
        &self,
        options: &GenerateOptions,
        sink: &dyn GenerateEventSink,
    ) -> HarnessResult<GenerateResult> {
        sink.on_event(GenerateEvent::Started {
            project_root: options.project_root.clone(),
            selected_count: options.selected.len(),
        });

        let scaffold = self.scaffold(options, sink)?;

        ConfigPatcher::new(&options.config.karma, options.project_name())
            .apply(&scaffold, sink)?;

        let app_dir = scaffold.join("src").join("app");
        let report = FileImporter::new(&options.project_root, &app_dir)
            .import_all(&options.selected, sink)?;

        let normalizer = StructureNormalizer::new(&app_dir);
        let outcome = normalizer.normalize(sink)?;
        let imported: Vec<ImportedFile> = report
            .imported
            .into_iter()
            .map(|file| ImportedFile {
                destination: normalizer.relocate(&file.destination),
                source: file.source,
            })
            .collect();

        if options.skip_install {
            sink.on_event(GenerateEvent::InstallSkipped);
        } else {
            self.install(&scaffold, options, sink)?;
        }

        let mut stubs = Vec::new();
        for file in &imported {
            if let Some(stub) = write_stub(&file.destination)? {
                sink.on_event(GenerateEvent::StubWritten { path: stub.clone() });
                stubs.push(stub);
            }
        }

        sink.on_event(GenerateEvent::Completed {
            scaffold: scaffold.clone(),
            imported_count: imported.len(),
            skipped_count: report.skipped.len(),
            stub_count: stubs.len(),
        });

        Ok(GenerateResult {
            scaffold,
            imported,
            skipped: report.skipped,
            stubs,
            normalized: outcome.flattened,
        })
    }

    /// `ng new` in a fresh temp directory, then rename to `<name>-<id>`
    fn scaffold(
        &self,
        options: &GenerateOptions,
        sink: &dyn GenerateEventSink,
    ) -> HarnessResult<PathBuf> {
        let scaffold = &options.config.scaffold;
        let temp_dir = self.workspace.create_temp_dir()?;

        let mut args = vec![
            scaffold.cli_package.clone(),
            "new".to_string(),
            scaffold.project_name.clone(),
            "--minimal".to_string(),
        ];
        args.extend(scaffold.extra_args.iter().cloned());
        self.run_checked(Invocation::new(&scaffold.npx, args, &temp_dir), sink)?;

        let generated = temp_dir.join(&scaffold.project_name);
        if !generated.is_dir() {
            return Err(HarnessError::ScaffoldMissing { path: generated });
        }

        let destination = temp_dir.join(format!(
            "{}-{}",
            scaffold.project_name,
            self.workspace.unique_id()
        ));
        fs::rename(&generated, &destination)?;

        sink.on_event(GenerateEvent::ScaffoldCreated {
            path: destination.clone(),
        });
        Ok(destination)
    }

    /// `npm install`, then `npm install --save-dev <test runner packages>`
    fn install(
        &self,
        scaffold: &Path,
        options: &GenerateOptions,
        sink: &dyn GenerateEventSink,
    ) -> HarnessResult<()> {
        let install = &options.config.install;

        self.run_checked(Invocation::new(&install.npm, ["install"], scaffold), sink)?;

        if !install.dev_dependencies.is_empty() {
            let args = ["install".to_string(), "--save-dev".to_string()]
                .into_iter()
                .chain(install.dev_dependencies.iter().cloned());
            self.run_checked(Invocation::new(&install.npm, args, scaffold), sink)?;
        }

        Ok(())
    }

    fn run_checked(
        &self,
        invocation: Invocation,
        sink: &dyn GenerateEventSink,
    ) -> HarnessResult<CommandOutput> {
        sink.on_event(GenerateEvent::CommandStarted {
            command_line: invocation.command_line(),
            cwd: invocation.cwd.clone(),
        });

        let output = self.runner.run(&invocation)?;

        sink.on_event(GenerateEvent::CommandOutput {
            command_line: invocation.command_line(),
            stdout: output.stdout.clone(),
            stderr: output.stderr.clone(),
        });

        output.ensure_success(&invocation)
    }
}
