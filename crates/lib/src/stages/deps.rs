//! Dependency installation through vcpkg.
//!
//! Two steps per run:
//! 1. make sure the vcpkg executable exists, bootstrapping it when missing or
//!    when a rebuild is forced;
//! 2. run `vcpkg install` for the target's manifest into the target's own
//!    install root.

use tracing::info;

use crate::consts::VCPKG_BUILD_TYPE_ENV;
use crate::error::{BuildError, CommandFailure};
use crate::exec::{CommandResult, CommandRunner, Invocation};
use crate::paths::ProjectPaths;
use crate::platform::Triplet;
use crate::types::{BuildTarget, BuildVariant};

/// Options for a dependency install.
#[derive(Debug, Clone)]
pub struct InstallOptions {
  pub target: BuildTarget,
  pub variant: BuildVariant,
  pub triplet: Triplet,
  /// Re-run bootstrap even when vcpkg is already present.
  pub force_rebuild_tool: bool,
  /// Passed through as `--dry-run`; nothing is simulated locally.
  pub dry_run: bool,
}

/// What happened to the vcpkg executable before installing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolPreparation {
  Bootstrapped,
  Updated,
  Skipped,
}

#[derive(Debug)]
pub struct InstallOutcome {
  pub tool: ToolPreparation,
  pub install: CommandResult,
}

/// Ensure the vcpkg executable exists.
pub async fn prepare_tool<R: CommandRunner>(
  runner: &R,
  paths: &ProjectPaths,
  force_rebuild: bool,
) -> Result<ToolPreparation, BuildError> {
  if !paths.vcpkg_root.is_dir() {
    return Err(BuildError::ToolRootNotFound {
      path: paths.vcpkg_root.clone(),
    });
  }

  info!(root = %paths.vcpkg_root.display(), "preparing vcpkg");

  let preparation = match (paths.vcpkg_executable.exists(), force_rebuild) {
    (false, _) => ToolPreparation::Bootstrapped,
    (true, true) => ToolPreparation::Updated,
    (true, false) => {
      info!("vcpkg already exists, skipping bootstrap");
      return Ok(ToolPreparation::Skipped);
    }
  };

  let invocation = bootstrap_invocation(paths);
  let result = runner
    .run(&invocation)
    .await
    .map_err(|err| BuildError::from_exec(err, BuildError::ToolBootstrapFailed))?;
  if !result.succeeded {
    return Err(BuildError::ToolBootstrapFailed(CommandFailure::new(&invocation, &result)));
  }

  if !paths.vcpkg_executable.exists() {
    return Err(BuildError::ToolNotFound {
      path: paths.vcpkg_executable.clone(),
    });
  }

  Ok(preparation)
}

pub fn bootstrap_invocation(paths: &ProjectPaths) -> Invocation {
  Invocation::new(&paths.vcpkg_root, &paths.vcpkg_bootstrap)
}

/// `vcpkg install` for one target, run from the target's manifest root.
pub fn install_invocation(paths: &ProjectPaths, options: &InstallOptions) -> Invocation {
  let install_root = paths.install_root(options.target);

  let invocation = Invocation::new(paths.manifest_root(options.target), &paths.vcpkg_executable)
    .arg("install")
    .args(["--triplet", options.triplet.as_str()])
    .arg("--vcpkg-root")
    .arg(paths.vcpkg_root.to_string_lossy())
    .arg("--x-install-root")
    .arg(install_root.to_string_lossy())
    .args(["--clean-buildtrees-after-build", "--clean-packages-after-build"])
    .env(VCPKG_BUILD_TYPE_ENV, options.variant.vcpkg_build_type());

  if options.dry_run {
    invocation.arg("--dry-run")
  } else {
    invocation
  }
}

/// Prepare vcpkg, then install the target's manifest dependencies.
pub async fn install<R: CommandRunner>(
  runner: &R,
  paths: &ProjectPaths,
  options: &InstallOptions,
) -> Result<InstallOutcome, BuildError> {
  let tool = prepare_tool(runner, paths, options.force_rebuild_tool).await?;

  info!(
    target = %options.target,
    variant = %options.variant,
    triplet = %options.triplet,
    dry_run = options.dry_run,
    "installing dependencies"
  );

  let invocation = install_invocation(paths, options);
  let result = runner
    .run(&invocation)
    .await
    .map_err(|err| BuildError::from_exec(err, BuildError::DependencyInstallFailed))?;
  if !result.succeeded {
    return Err(BuildError::DependencyInstallFailed(CommandFailure::new(&invocation, &result)));
  }

  info!(target = %options.target, "dependencies installed");
  Ok(InstallOutcome { tool, install: result })
}
