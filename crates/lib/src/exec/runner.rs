//! Process runner implementation.
//!
//! Runs one external tool at a time inside an explicit working directory. Stdout
//! is forwarded to the log line by line while the tool runs, so long vcpkg and
//! compiler runs show progress; stderr is kept whole and handed back for error
//! reporting once the process has exited.

use std::future::Future;
use std::io;
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};
use tokio::process::{Child, Command};
use tracing::{debug, info, warn};

use super::types::{CommandResult, ExecError, Invocation};

/// Launches external commands for the pipeline stages.
pub trait CommandRunner {
  /// Run `invocation` to completion.
  ///
  /// Returns `Err` only when the command could not be started or its output
  /// could not be read. A non-zero exit is reported through
  /// [`CommandResult::succeeded`].
  fn run(&self, invocation: &Invocation) -> impl Future<Output = Result<CommandResult, ExecError>>;
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
  fn run(&self, invocation: &Invocation) -> impl Future<Output = Result<CommandResult, ExecError>> {
    run_process(invocation)
  }
}

/// Spawn `invocation` and wait for it, streaming stdout to the log.
///
/// The working directory is handed to the child; the parent's current
/// directory is never touched.
pub async fn run_process(invocation: &Invocation) -> Result<CommandResult, ExecError> {
  let command_line = invocation.command_line();

  if !invocation.workdir.is_dir() {
    return Err(ExecError::WorkdirNotFound {
      command: command_line,
      workdir: invocation.workdir.clone(),
    });
  }

  info!(cmd = %command_line, workdir = %invocation.workdir.display(), "starting command");

  let mut command = Command::new(&invocation.program);
  command
    .args(&invocation.args)
    .envs(&invocation.env)
    .current_dir(&invocation.workdir)
    .stdin(Stdio::null())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .kill_on_drop(true);

  debug!(env = ?invocation.env, "spawning process");

  let mut child = command.spawn().map_err(|source| ExecError::Spawn {
    command: command_line.clone(),
    source,
  })?;

  let tool = invocation.program_name();
  let stdout = child.stdout.take();
  let stderr = child.stderr.take();

  // Stderr is drained alongside stdout so a chatty tool cannot stall on a full pipe.
  let output = async { tokio::try_join!(stream_lines(stdout, &tool), read_all(stderr)) };
  let (stdout_lines, stderr) = collect_or_kill(&mut child, output)
    .await
    .map_err(|source| ExecError::Io {
      command: command_line.clone(),
      source,
    })?;

  let status = child.wait().await.map_err(|source| ExecError::Io {
    command: command_line.clone(),
    source,
  })?;

  let exit_code = status.code().unwrap_or(-1);
  let result = CommandResult {
    succeeded: status.success(),
    exit_code,
    stdout_lines,
    stderr,
  };

  if result.succeeded {
    info!(cmd = %command_line, "command succeeded");
  } else {
    debug!(cmd = %command_line, code = exit_code, stderr = %result.stderr, "command failed");
  }

  Ok(result)
}

/// Await the child's output; on a read error, kill and reap the child first.
async fn collect_or_kill<T>(child: &mut Child, output: impl Future<Output = io::Result<T>>) -> io::Result<T> {
  match output.await {
    Ok(value) => Ok(value),
    Err(err) => {
      if let Err(kill_err) = child.kill().await {
        warn!(error = %kill_err, "failed to kill child after read error");
      }
      Err(err)
    }
  }
}

async fn stream_lines<R>(reader: Option<R>, tool: &str) -> io::Result<Vec<String>>
where
  R: AsyncRead + Unpin,
{
  let mut lines = Vec::new();
  let Some(reader) = reader else {
    return Ok(lines);
  };

  // Split on raw bytes: compilers do not always emit valid UTF-8.
  let mut segments = BufReader::new(reader).split(b'\n');
  while let Some(segment) = segments.next_segment().await? {
    let line = String::from_utf8_lossy(&segment).trim_end_matches('\r').to_string();
    if !line.trim().is_empty() {
      info!(tool = %tool, "{}", line.trim());
    }
    lines.push(line);
  }

  Ok(lines)
}

async fn read_all<R>(reader: Option<R>) -> io::Result<String>
where
  R: AsyncRead + Unpin,
{
  let mut buf = Vec::new();
  if let Some(mut reader) = reader {
    reader.read_to_end(&mut buf).await?;
  }
  Ok(String::from_utf8_lossy(&buf).into_owned())
}
