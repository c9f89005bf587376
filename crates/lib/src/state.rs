//! Observed install state.
//!
//! Nothing here is persisted: every field is a fresh filesystem check, the same
//! checks the stages make when deciding what to run.

use std::path::PathBuf;

use serde::Serialize;

use crate::paths::ProjectPaths;
use crate::types::BuildTarget;
use crate::util::fs::dir_size;

#[derive(Debug, Clone, Serialize)]
pub struct TargetState {
  pub target: BuildTarget,
  pub manifest_root: PathBuf,
  pub manifest_root_present: bool,
  pub build_dir_present: bool,
  pub install_root_present: bool,
  pub build_dir_bytes: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct InstallState {
  pub vcpkg_root_present: bool,
  pub vcpkg_present: bool,
  pub targets: Vec<TargetState>,
}

impl InstallState {
  pub fn observe(paths: &ProjectPaths) -> Self {
    let targets = BuildTarget::ALL
      .iter()
      .map(|&target| {
        let build_root = paths.build_root(target);
        TargetState {
          target,
          manifest_root: paths.manifest_root(target).to_path_buf(),
          manifest_root_present: paths.manifest_root(target).is_dir(),
          build_dir_present: build_root.is_dir(),
          install_root_present: paths.install_root(target).is_dir(),
          build_dir_bytes: dir_size(&build_root),
        }
      })
      .collect();

    Self {
      vcpkg_root_present: paths.vcpkg_root.is_dir(),
      vcpkg_present: paths.vcpkg_executable.exists(),
      targets,
    }
  }

  pub fn target(&self, target: BuildTarget) -> Option<&TargetState> {
    self.targets.iter().find(|t| t.target == target)
  }
}
