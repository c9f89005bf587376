//! Package-manager triplet and generator defaults.
//!
//! vcpkg has no "build for whatever I'm running on" mode: every install needs a
//! triplet. When the caller does not name one, the host decides.

use std::fmt;

use serde::Serialize;

use super::Os;

/// Identifier for target architecture, OS and linkage, as vcpkg spells it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Triplet(String);

impl Triplet {
  pub fn new(value: impl Into<String>) -> Self {
    Self(value.into())
  }

  /// Default triplet for a host OS.
  pub fn host_default(os: Os) -> Self {
    let value = match os {
      Os::Windows => "x64-windows-static-release",
      Os::MacOs => "arm64-osx",
      Os::Unix => "x64-linux-dynamic",
    };
    Self::new(value)
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for Triplet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Resolve the triplet for this run.
///
/// An explicit, non-empty triplet is returned verbatim regardless of `os`.
pub fn resolve_triplet(explicit: Option<&str>, os: Os) -> Triplet {
  match explicit {
    Some(value) if !value.is_empty() => Triplet::new(value),
    _ => Triplet::host_default(os),
  }
}

/// CMake generator used when none is requested.
pub fn default_generator(os: Os) -> &'static str {
  match os {
    Os::Windows => "Visual Studio 17 2022",
    Os::MacOs | Os::Unix => "Unix Makefiles",
  }
}
