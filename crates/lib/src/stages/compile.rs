use tracing::info;

use crate::consts::CMAKE;
use crate::error::{BuildError, CommandFailure};
use crate::exec::{CommandResult, CommandRunner, Invocation};
use crate::paths::ProjectPaths;
use crate::types::{BuildTarget, BuildVariant};

pub fn compile_invocation(paths: &ProjectPaths, target: BuildTarget, variant: BuildVariant) -> Invocation {
  Invocation::new(paths.build_root(target), CMAKE).args(["--build", ".", "--config", variant.as_str()])
}

/// Build an already-configured target. Never configures implicitly.
pub async fn compile<R: CommandRunner>(
  runner: &R,
  paths: &ProjectPaths,
  target: BuildTarget,
  variant: BuildVariant,
) -> Result<CommandResult, BuildError> {
  let build_root = paths.build_root(target);
  if !build_root.is_dir() {
    return Err(BuildError::BuildDirNotFound { path: build_root });
  }

  info!(target = %target, variant = %variant, "compiling project");

  let invocation = compile_invocation(paths, target, variant);
  let result = runner
    .run(&invocation)
    .await
    .map_err(|err| BuildError::from_exec(err, BuildError::CompileFailed))?;
  if !result.succeeded {
    return Err(BuildError::CompileFailed(CommandFailure::new(&invocation, &result)));
  }

  Ok(result)
}
