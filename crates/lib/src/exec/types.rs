//! Types for describing and reporting external commands.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised before a command produces an exit status.
///
/// A non-zero exit is not an error at this level; see [`CommandResult::succeeded`].
#[derive(Debug, Error)]
pub enum ExecError {
  #[error("working directory not found for `{command}`: {}", workdir.display())]
  WorkdirNotFound { command: String, workdir: PathBuf },

  #[error("failed to launch `{command}`: {source}")]
  Spawn { command: String, source: std::io::Error },

  #[error("failed to read output of `{command}`: {source}")]
  Io { command: String, source: std::io::Error },
}

/// A command to run: program, arguments, working directory and environment overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
  pub workdir: PathBuf,
  pub program: PathBuf,
  pub args: Vec<String>,
  /// Merged over the caller's environment; these win on collision.
  pub env: BTreeMap<String, String>,
}

impl Invocation {
  pub fn new(workdir: impl Into<PathBuf>, program: impl Into<PathBuf>) -> Self {
    Self {
      workdir: workdir.into(),
      program: program.into(),
      args: Vec::new(),
      env: BTreeMap::new(),
    }
  }

  pub fn arg(mut self, arg: impl Into<String>) -> Self {
    self.args.push(arg.into());
    self
  }

  pub fn args<I, S>(mut self, args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.args.extend(args.into_iter().map(Into::into));
    self
  }

  pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.env.insert(key.into(), value.into());
    self
  }

  /// Short program name for log fields (`vcpkg`, `cmake`).
  pub fn program_name(&self) -> String {
    self
      .program
      .file_name()
      .unwrap_or(self.program.as_os_str())
      .to_string_lossy()
      .into_owned()
  }

  /// `program arg1 arg2 ...` as shown to the operator.
  pub fn command_line(&self) -> String {
    let mut line = self.program.display().to_string();
    for arg in &self.args {
      line.push(' ');
      line.push_str(arg);
    }
    line
  }
}

impl fmt::Display for Invocation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.command_line())
  }
}

/// Outcome of a command that ran to completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
  pub succeeded: bool,
  /// Exit code, or -1 when the process was terminated by a signal.
  pub exit_code: i32,
  pub stdout_lines: Vec<String>,
  pub stderr: String,
}

impl CommandResult {
  pub fn from_exit_code(exit_code: i32) -> Self {
    Self {
      succeeded: exit_code == 0,
      exit_code,
      ..Default::default()
    }
  }

  pub fn success() -> Self {
    Self::from_exit_code(0)
  }

  pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
    Self {
      stderr: stderr.into(),
      ..Self::from_exit_code(exit_code)
    }
  }
}
