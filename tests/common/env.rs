//! Test environment builder for isolated ngharness testing.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Result of running an ngharness CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment.
///
/// HOME and the user config directory point into a temp dir so a developer's
/// own `ngharness/config.toml` never leaks into a test, and `TMPDIR` points
/// at a directory the test can inspect for created scaffolds.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    pub temp_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_ngharness")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Run the CLI from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the CLI from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("TMPDIR", self.temp_dir.path())
            .env_remove("NGHARNESS_NPX")
            .env_remove("NGHARNESS_NPM")
            .env_remove("NGHARNESS_PROJECT_NAME")
            .env_remove("NGHARNESS_KARMA_PORT")
            .env_remove("NGHARNESS_KARMA_BROWSER");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute ngharness");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Scaffold directories created under the test's TMPDIR
    pub fn scaffolds(&self) -> Vec<PathBuf> {
        let mut found = Vec::new();
        for workspace in std::fs::read_dir(self.temp_dir.path()).expect("read temp dir") {
            let workspace = workspace.expect("temp entry").path();
            if !workspace.is_dir() {
                continue;
            }
            for entry in std::fs::read_dir(&workspace).expect("read workspace") {
                let path = entry.expect("workspace entry").path();
                if path.join("angular.json").is_file() {
                    found.push(path);
                }
            }
        }
        found
    }
}
