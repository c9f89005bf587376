//! Stage-level failures.
//!
//! Process-level errors are translated here exactly once, at the stage boundary,
//! into a named condition that carries the failing command and its stderr.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::exec::{CommandResult, ExecError, Invocation};

/// A command that exited non-zero or could not be run at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFailure {
  pub command: String,
  /// `None` when the process never started or its output could not be read.
  pub exit_code: Option<i32>,
  /// Captured stderr, or the OS error for a launch failure.
  pub stderr: String,
}

impl CommandFailure {
  pub fn new(invocation: &Invocation, result: &CommandResult) -> Self {
    Self {
      command: invocation.command_line(),
      exit_code: Some(result.exit_code),
      stderr: result.stderr.trim_end().to_string(),
    }
  }

  pub fn launch(command: String, source: &io::Error) -> Self {
    Self {
      command,
      exit_code: None,
      stderr: source.to_string(),
    }
  }
}

impl fmt::Display for CommandFailure {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.exit_code {
      Some(code) => {
        write!(f, "`{}` exited with code {}", self.command, code)?;
        if !self.stderr.is_empty() {
          write!(f, "\nstderr: {}", self.stderr)?;
        }
        Ok(())
      }
      None => write!(f, "`{}` could not be run: {}", self.command, self.stderr),
    }
  }
}

#[derive(Debug, Error)]
pub enum BuildError {
  #[error("working directory not found for `{command}`: {}", workdir.display())]
  WorkdirNotFound { command: String, workdir: PathBuf },

  #[error("vcpkg root not found: {}", path.display())]
  ToolRootNotFound { path: PathBuf },

  #[error("failed to bootstrap vcpkg: {0}")]
  ToolBootstrapFailed(CommandFailure),

  #[error("vcpkg executable not found after bootstrap: {}", path.display())]
  ToolNotFound { path: PathBuf },

  #[error("failed to install dependencies: {0}")]
  DependencyInstallFailed(CommandFailure),

  #[error("failed to configure project: {0}")]
  ConfigureFailed(CommandFailure),

  #[error("build directory not found: {} (configure the project first)", path.display())]
  BuildDirNotFound { path: PathBuf },

  #[error("failed to compile project: {0}")]
  CompileFailed(CommandFailure),

  #[error("failed to {action} {}: {source}", path.display())]
  Fs {
    action: &'static str,
    path: PathBuf,
    source: io::Error,
  },
}

impl BuildError {
  /// Translate a runner error into the named condition of the stage that ran it.
  ///
  /// A missing working directory keeps its own name; anything else becomes
  /// `stage` with the OS error as the failure detail.
  pub fn from_exec(err: ExecError, stage: fn(CommandFailure) -> BuildError) -> Self {
    match err {
      ExecError::WorkdirNotFound { command, workdir } => BuildError::WorkdirNotFound { command, workdir },
      ExecError::Spawn { command, source } | ExecError::Io { command, source } => {
        stage(CommandFailure::launch(command, &source))
      }
    }
  }
}
