//! CMake configuration of a target's build directory.

use std::path::Path;

use tracing::info;

use crate::consts::CMAKE;
use crate::error::{BuildError, CommandFailure};
use crate::exec::{CommandResult, CommandRunner, Invocation};
use crate::paths::ProjectPaths;
use crate::platform::{Os, Triplet, default_generator};
use crate::types::{BuildTarget, BuildVariant};

#[derive(Debug, Clone)]
pub struct ConfigureOptions {
  pub target: BuildTarget,
  pub variant: BuildVariant,
  pub triplet: Triplet,
  /// Force `VCPKG_MANIFEST_INSTALL=ON` regardless of the install root.
  pub enable_install: bool,
  /// Generator to select with `-G`; `None` leaves the choice to CMake.
  pub generator: Option<String>,
  pub build_tests: bool,
}

#[derive(Debug)]
pub struct ConfigureOutcome {
  pub manifest_install: bool,
  pub result: CommandResult,
}

/// Whether CMake should run the vcpkg manifest install itself.
///
/// Explicit request wins; otherwise only when nothing has been installed yet.
pub fn manifest_install_enabled(explicit: bool, install_root: &Path) -> bool {
  explicit || !install_root.exists()
}

/// Keep a requested generator only when it differs from the host default.
pub fn requested_generator(requested: Option<&str>, os: Os) -> Option<String> {
  requested
    .map(str::trim)
    .filter(|g| !g.is_empty() && *g != default_generator(os))
    .map(str::to_string)
}

fn on_off(value: bool) -> &'static str {
  if value { "ON" } else { "OFF" }
}

pub fn configure_invocation(paths: &ProjectPaths, options: &ConfigureOptions, manifest_install: bool) -> Invocation {
  let manifest_root = paths.manifest_root(options.target);
  let mut invocation = Invocation::new(paths.build_root(options.target), CMAKE);

  // -G has to come first for CMake to interpret generator-specific flags.
  if let Some(generator) = &options.generator {
    invocation = invocation.args(["-G", generator.as_str()]);
  }

  let invocation = invocation
    .arg(manifest_root.to_string_lossy())
    .arg(format!("-DCMAKE_TOOLCHAIN_FILE={}", paths.toolchain_file().display()))
    .arg(format!("-DVCPKG_MANIFEST_DIR={}", manifest_root.display()))
    .arg(format!("-DVCPKG_TARGET_TRIPLET={}", options.triplet))
    .arg(format!("-DVCPKG_MANIFEST_INSTALL={}", on_off(manifest_install)))
    .arg(format!("-DCMAKE_BUILD_TYPE={}", options.variant));

  if options.build_tests {
    invocation.arg("-DBUILD_TEST=ON")
  } else {
    invocation
  }
}

/// Generate the build system for a target.
///
/// Safe to re-run into an existing build directory; CMake reconfigures
/// incrementally.
pub async fn configure<R: CommandRunner>(
  runner: &R,
  paths: &ProjectPaths,
  options: &ConfigureOptions,
) -> Result<ConfigureOutcome, BuildError> {
  let manifest_root = paths.manifest_root(options.target);
  let build_root = paths.build_root(options.target);

  // The build dir lives under the manifest root; never create the latter.
  if !manifest_root.is_dir() {
    return Err(BuildError::WorkdirNotFound {
      command: configure_invocation(paths, options, false).command_line(),
      workdir: manifest_root.to_path_buf(),
    });
  }

  let manifest_install = manifest_install_enabled(options.enable_install, &paths.install_root(options.target));

  if !build_root.exists() {
    std::fs::create_dir_all(&build_root).map_err(|source| BuildError::Fs {
      action: "create",
      path: build_root.clone(),
      source,
    })?;
  }

  info!(
    target = %options.target,
    variant = %options.variant,
    triplet = %options.triplet,
    manifest_install,
    "configuring project"
  );

  let invocation = configure_invocation(paths, options, manifest_install);
  let result = runner
    .run(&invocation)
    .await
    .map_err(|err| BuildError::from_exec(err, BuildError::ConfigureFailed))?;
  if !result.succeeded {
    return Err(BuildError::ConfigureFailed(CommandFailure::new(&invocation, &result)));
  }

  Ok(ConfigureOutcome {
    manifest_install,
    result,
  })
}
