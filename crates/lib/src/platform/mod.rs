//! Host platform detection and the defaults derived from it.

pub mod triplet;

use std::fmt;

use serde::Serialize;

pub use triplet::{Triplet, default_generator, resolve_triplet};

/// Host operating system families that need distinct tool defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
  Windows,
  MacOs,
  /// Linux and every other Unix-like host.
  Unix,
}

impl Os {
  /// Detect the current operating system at runtime
  pub fn current() -> Self {
    match std::env::consts::OS {
      "windows" => Self::Windows,
      "macos" => Self::MacOs,
      _ => Self::Unix,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Windows => "windows",
      Self::MacOs => "macos",
      Self::Unix => "unix",
    }
  }

  /// File name of the package-manager executable on this OS.
  pub fn vcpkg_executable(&self) -> &'static str {
    match self {
      Self::Windows => "vcpkg.exe",
      _ => "vcpkg",
    }
  }

  /// File name of the package-manager bootstrap script on this OS.
  pub fn vcpkg_bootstrap_script(&self) -> &'static str {
    match self {
      Self::Windows => "bootstrap-vcpkg.bat",
      _ => "bootstrap-vcpkg.sh",
    }
  }
}

impl fmt::Display for Os {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
