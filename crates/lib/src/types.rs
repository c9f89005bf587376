//! Build selection types shared by every stage.

use std::fmt;

use serde::Serialize;

/// Which half of the project the pipeline operates on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTarget {
  #[default]
  Server,
  Client,
}

impl BuildTarget {
  pub const ALL: [BuildTarget; 2] = [BuildTarget::Server, BuildTarget::Client];

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Server => "server",
      Self::Client => "client",
    }
  }
}

impl fmt::Display for BuildTarget {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Compilation configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum BuildVariant {
  #[default]
  Release,
  Debug,
}

impl BuildVariant {
  /// Name as understood by CMake (`CMAKE_BUILD_TYPE`, `--config`).
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Release => "Release",
      Self::Debug => "Debug",
    }
  }

  /// Value for the package manager's `VCPKG_BUILD_TYPE` toggle.
  pub fn vcpkg_build_type(&self) -> &'static str {
    match self {
      Self::Release => "release",
      Self::Debug => "debug",
    }
  }
}

impl fmt::Display for BuildVariant {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
