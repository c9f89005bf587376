//! Shared test helpers for CLI integration tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Bootstrap script that "builds" a vcpkg stand-in next to itself.
const BOOTSTRAP_SCRIPT: &str = r#"#!/bin/sh
echo "bootstrap" >> "$QTBUILD_TEST_LOG"
dir=$(dirname "$0")
cat > "$dir/vcpkg" <<'EOS'
#!/bin/sh
echo "vcpkg $* VCPKG_BUILD_TYPE=$VCPKG_BUILD_TYPE" >> "$QTBUILD_TEST_LOG"
echo "Installing 1/1 zlib"
exit ${FAKE_VCPKG_EXIT:-0}
EOS
chmod +x "$dir/vcpkg"
"#;

/// cmake stand-in: logs its arguments and the directory it ran in.
const CMAKE_SCRIPT: &str = r#"#!/bin/sh
echo "cmake $* (in $(pwd))" >> "$QTBUILD_TEST_LOG"
if [ -n "$FAKE_CMAKE_EXIT" ]; then
  echo "CMake Error: simulated failure" >&2
  exit "$FAKE_CMAKE_EXIT"
fi
"#;

fn write_executable(path: &Path, content: &str) {
  fs::write(path, content).unwrap();
  let mut perms = fs::metadata(path).unwrap().permissions();
  perms.set_mode(0o755);
  fs::set_permissions(path, perms).unwrap();
}

/// Isolated project checkout with fake tools.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  /// Project with server/client sources and an unbootstrapped vcpkg checkout.
  pub fn new() -> Self {
    let temp = TempDir::new().unwrap();
    let env = Self { temp };

    for dir in ["server", "client", "thirdparties/vcpkg", "bin"] {
      fs::create_dir_all(env.root().join(dir)).unwrap();
    }
    write_executable(&env.vcpkg_root().join("bootstrap-vcpkg.sh"), BOOTSTRAP_SCRIPT);
    write_executable(&env.root().join("bin").join("cmake"), CMAKE_SCRIPT);

    env
  }

  pub fn root(&self) -> PathBuf {
    dunce::canonicalize(self.temp.path()).unwrap()
  }

  pub fn vcpkg_root(&self) -> PathBuf {
    self.root().join("thirdparties").join("vcpkg")
  }

  pub fn log_path(&self) -> PathBuf {
    self.root().join("tools.log")
  }

  /// Lines the fake tools appended, one per invocation.
  pub fn tool_log(&self) -> Vec<String> {
    fs::read_to_string(self.log_path())
      .unwrap_or_default()
      .lines()
      .map(str::to_string)
      .collect()
  }

  pub fn mkdir(&self, relative: &str) {
    fs::create_dir_all(self.root().join(relative)).unwrap();
  }

  /// Pre-configured Command for the qtbuild binary.
  ///
  /// - `QTBUILD_ROOT`: the temp project
  /// - `PATH`: fake `cmake` first
  /// - `QTBUILD_TEST_LOG`: where the fake tools record their invocations
  /// - `RUST_LOG` unset so streamed tool output is visible at the default level
  pub fn qtbuild_cmd(&self) -> Command {
    let path = std::env::var("PATH").unwrap_or_default();
    let mut cmd: Command = cargo_bin_cmd!("qtbuild");
    cmd.env("QTBUILD_ROOT", self.root());
    cmd.env_remove("QTBUILD_VCPKG_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd.env("PATH", format!("{}:{}", self.root().join("bin").display(), path));
    cmd.env("QTBUILD_TEST_LOG", self.log_path());
    cmd
  }
}
