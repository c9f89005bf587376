use tracing::info;

use crate::error::BuildError;
use crate::paths::ProjectPaths;
use crate::types::BuildTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanOutcome {
  Removed,
  AlreadyClean,
}

/// Remove a target's build directory. Absent directory is not an error.
pub fn clean(paths: &ProjectPaths, target: BuildTarget) -> Result<CleanOutcome, BuildError> {
  let build_root = paths.build_root(target);

  if !build_root.exists() {
    info!(target = %target, "build directory already clean");
    return Ok(CleanOutcome::AlreadyClean);
  }

  info!(target = %target, path = %build_root.display(), "removing build directory");
  std::fs::remove_dir_all(&build_root).map_err(|source| BuildError::Fs {
    action: "remove",
    path: build_root,
    source,
  })?;

  Ok(CleanOutcome::Removed)
}
