//! Fixed project directory layout.
//!
//! Everything is derived from one anchor directory:
//!
//! ```text
//! <root>/server                      manifest root (server)
//! <root>/client                      manifest root (client)
//! <root>/thirdparties/vcpkg          package-manager root
//! <target>/build                     build directory
//! <target>/build/vcpkg_installed     dependency install root
//! ```

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::consts::{
  BUILD_DIR, CLIENT_DIR, INSTALL_DIR, ROOT_ENV, SERVER_DIR, VCPKG_DIR, VCPKG_ROOT_ENV, VCPKG_TOOLCHAIN,
};
use crate::platform::Os;
use crate::types::BuildTarget;

/// Read-only layout computed once per invocation.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectPaths {
  pub project_root: PathBuf,
  pub server_root: PathBuf,
  pub client_root: PathBuf,
  pub vcpkg_root: PathBuf,
  pub vcpkg_executable: PathBuf,
  pub vcpkg_bootstrap: PathBuf,
}

impl ProjectPaths {
  /// Derive the layout from `root` for a host `os`.
  ///
  /// `QTBUILD_VCPKG_ROOT` relocates the package-manager root; everything else is
  /// fixed relative to `root`.
  pub fn new(root: &Path, os: Os) -> Self {
    let vcpkg_root = std::env::var_os(VCPKG_ROOT_ENV)
      .filter(|v| !v.is_empty())
      .map(PathBuf::from)
      .unwrap_or_else(|| root.join(VCPKG_DIR));

    Self::with_vcpkg_root(root, vcpkg_root, os)
  }

  pub fn with_vcpkg_root(root: &Path, vcpkg_root: PathBuf, os: Os) -> Self {
    Self {
      project_root: root.to_path_buf(),
      server_root: root.join(SERVER_DIR),
      client_root: root.join(CLIENT_DIR),
      vcpkg_executable: vcpkg_root.join(os.vcpkg_executable()),
      vcpkg_bootstrap: vcpkg_root.join(os.vcpkg_bootstrap_script()),
      vcpkg_root,
    }
  }

  /// Source directory holding the target's dependency manifest.
  pub fn manifest_root(&self, target: BuildTarget) -> &Path {
    match target {
      BuildTarget::Server => &self.server_root,
      BuildTarget::Client => &self.client_root,
    }
  }

  pub fn build_root(&self, target: BuildTarget) -> PathBuf {
    self.manifest_root(target).join(BUILD_DIR)
  }

  /// Per-target install root; matches CMake's default `VCPKG_INSTALLED_DIR`.
  pub fn install_root(&self, target: BuildTarget) -> PathBuf {
    self.build_root(target).join(INSTALL_DIR)
  }

  pub fn toolchain_file(&self) -> PathBuf {
    self.vcpkg_root.join(VCPKG_TOOLCHAIN)
  }
}

/// Resolve the project anchor.
///
/// Precedence: explicit path, then `QTBUILD_ROOT`, then the current directory.
/// The result is canonicalized so later path joins are stable.
pub fn project_root(explicit: Option<&Path>) -> io::Result<PathBuf> {
  let root = match explicit {
    Some(path) => path.to_path_buf(),
    None => match std::env::var_os(ROOT_ENV).filter(|v| !v.is_empty()) {
      Some(path) => PathBuf::from(path),
      None => std::env::current_dir()?,
    },
  };
  dunce::canonicalize(&root)
}
