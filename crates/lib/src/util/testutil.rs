//! Test utilities for qtbuild-lib.
//!
//! Cross-platform shell helpers for runner tests, plus a recording runner that
//! lets stage and pipeline tests observe exactly which tools were launched.

use std::cell::RefCell;
use std::path::Path;

use crate::exec::{CommandResult, CommandRunner, ExecError, Invocation};
use crate::paths::ProjectPaths;
use crate::platform::Os;

/// Returns the shell command and args to echo an environment variable.
#[cfg(unix)]
pub fn shell_echo_env(var: &str) -> (&'static str, Vec<String>) {
  ("/bin/sh", vec!["-c".to_string(), format!("echo \"${}\"", var)])
}

#[cfg(windows)]
pub fn shell_echo_env(var: &str) -> (&'static str, Vec<String>) {
  ("cmd.exe", vec!["/C".to_string(), format!("echo %{}%", var)])
}

/// Returns the shell command and args to execute a shell script.
#[cfg(unix)]
pub fn shell_cmd(script: &str) -> (&'static str, Vec<String>) {
  ("/bin/sh", vec!["-c".to_string(), script.to_string()])
}

#[cfg(windows)]
pub fn shell_cmd(script: &str) -> (&'static str, Vec<String>) {
  ("cmd.exe", vec!["/C".to_string(), script.to_string()])
}

/// Returns the command and args to echo a message.
#[cfg(unix)]
pub fn echo_msg(msg: &str) -> (&'static str, Vec<String>) {
  ("/bin/echo", vec![msg.to_string()])
}

#[cfg(windows)]
pub fn echo_msg(msg: &str) -> (&'static str, Vec<String>) {
  ("cmd.exe", vec!["/C".to_string(), format!("echo {}", msg)])
}

type Responder = Box<dyn Fn(&Invocation) -> CommandResult>;

/// Runner that records invocations instead of spawning processes.
///
/// Honors the missing-workdir check like the real runner. Bootstrap invocations
/// create the vcpkg executable so later presence checks see it.
pub struct RecordingRunner {
  calls: RefCell<Vec<Invocation>>,
  respond: Responder,
  unlaunchable: Vec<String>,
  vcpkg_executable: std::path::PathBuf,
}

impl RecordingRunner {
  /// Every command succeeds.
  pub fn succeeding(paths: &ProjectPaths) -> Self {
    Self::with_responder(paths, |_| CommandResult::success())
  }

  pub fn with_responder(paths: &ProjectPaths, respond: impl Fn(&Invocation) -> CommandResult + 'static) -> Self {
    Self {
      calls: RefCell::new(Vec::new()),
      respond: Box::new(respond),
      unlaunchable: Vec::new(),
      vcpkg_executable: paths.vcpkg_executable.clone(),
    }
  }

  /// Programs whose file name ends with `suffix` fail to spawn, as if missing.
  pub fn unlaunchable(mut self, suffix: &str) -> Self {
    self.unlaunchable.push(suffix.to_string());
    self
  }

  pub fn calls(&self) -> Vec<Invocation> {
    self.calls.borrow().clone()
  }

  /// Recorded calls whose program file name ends with `suffix`.
  pub fn calls_to(&self, suffix: &str) -> Vec<Invocation> {
    self
      .calls
      .borrow()
      .iter()
      .filter(|inv| inv.program_name().ends_with(suffix))
      .cloned()
      .collect()
  }
}

impl CommandRunner for RecordingRunner {
  async fn run(&self, invocation: &Invocation) -> Result<CommandResult, ExecError> {
    if !invocation.workdir.is_dir() {
      return Err(ExecError::WorkdirNotFound {
        command: invocation.command_line(),
        workdir: invocation.workdir.clone(),
      });
    }

    self.calls.borrow_mut().push(invocation.clone());
    let program = invocation.program_name();
    if self.unlaunchable.iter().any(|suffix| program.ends_with(suffix.as_str())) {
      return Err(ExecError::Spawn {
        command: invocation.command_line(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
      });
    }

    let result = (self.respond)(invocation);

    let is_bootstrap = invocation.program_name().starts_with("bootstrap-vcpkg");
    if is_bootstrap && result.succeeded {
      std::fs::write(&self.vcpkg_executable, b"").map_err(|source| ExecError::Io {
        command: invocation.command_line(),
        source,
      })?;
    }

    Ok(result)
  }
}

/// Scratch project with server, client and vcpkg directories.
pub struct TestProject {
  pub temp: tempfile::TempDir,
  pub paths: ProjectPaths,
}

impl TestProject {
  pub fn new() -> Self {
    let temp = tempfile::TempDir::new().unwrap();
    let root = dunce::canonicalize(temp.path()).unwrap();
    let paths = ProjectPaths::with_vcpkg_root(&root, root.join("thirdparties").join("vcpkg"), Os::Unix);
    for dir in [&paths.server_root, &paths.client_root, &paths.vcpkg_root] {
      std::fs::create_dir_all(dir).unwrap();
    }
    Self { temp, paths }
  }

  /// Pretend vcpkg was already bootstrapped.
  pub fn with_vcpkg_executable(self) -> Self {
    std::fs::write(&self.paths.vcpkg_executable, b"").unwrap();
    self
  }

  pub fn mkdir(&self, path: &Path) {
    std::fs::create_dir_all(path).unwrap();
  }
}
