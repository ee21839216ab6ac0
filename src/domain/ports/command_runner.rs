//! CommandRunner port - abstraction over external process execution
//!
//! The pipeline only ever needs "run this program with these arguments in
//! this directory and give me the captured output". Keeping that behind a
//! trait lets tests substitute a recording fake for `npx`/`npm`.

use std::path::{Path, PathBuf};

use crate::error::{HarnessError, HarnessResult};

/// A single external command to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<String>, args: I, cwd: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.to_path_buf(),
        }
    }

    /// Arguments joined by spaces (for messages only, not for re-parsing)
    pub fn args_line(&self) -> String {
        self.args.join(" ")
    }

    /// Full command line (for messages only)
    pub fn command_line(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args_line())
        }
    }
}

/// Captured result of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code; `None` when terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    /// Turn a non-zero exit into `HarnessError::CommandFailed`
    pub fn ensure_success(self, invocation: &Invocation) -> HarnessResult<Self> {
        if self.is_success() {
            return Ok(self);
        }
        Err(HarnessError::CommandFailed {
            program: invocation.program.clone(),
            args: invocation.args_line(),
            code: self.code,
            stderr: self.stderr,
        })
    }
}

/// Runs external programs to completion.
///
/// Implementations:
/// - `SystemCommandRunner` - spawns real processes
/// - recording fakes in tests
pub trait CommandRunner {
    /// Run the invocation, blocking until it exits.
    ///
    /// A non-zero exit is NOT an error at this level; only failure to spawn is.
    fn run(&self, invocation: &Invocation) -> HarnessResult<CommandOutput>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, invocation: &Invocation) -> HarnessResult<CommandOutput> {
        (**self).run(invocation)
    }
}
