use predicates::prelude::*;
use serial_test::serial;

use crate::common::TestEnv;

#[test]
#[serial]
fn fresh_checkout_bootstraps_then_installs() {
  let env = TestEnv::new();

  env
    .qtbuild_cmd()
    .args(["build-dependencies", "--triplet", "x64-linux"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Dependencies installed"));

  let log = env.tool_log();
  assert_eq!(log.len(), 2, "{log:?}");
  assert_eq!(log[0], "bootstrap");
  assert!(log[1].starts_with("vcpkg install --triplet x64-linux"), "{}", log[1]);
  assert!(log[1].contains("--x-install-root"));
  assert!(log[1].contains("server/build/vcpkg_installed"));
  assert!(log[1].ends_with("VCPKG_BUILD_TYPE=release"));
}

#[test]
#[serial]
fn second_run_skips_bootstrap() {
  let env = TestEnv::new();

  for _ in 0..2 {
    env.qtbuild_cmd().arg("build-dependencies").assert().success();
  }

  let log = env.tool_log();
  assert_eq!(log.iter().filter(|l| *l == "bootstrap").count(), 1);
  assert_eq!(log.iter().filter(|l| l.starts_with("vcpkg install")).count(), 2);
}

#[test]
#[serial]
fn force_rebuild_bootstraps_again() {
  let env = TestEnv::new();

  env.qtbuild_cmd().arg("build-dependencies").assert().success();
  env
    .qtbuild_cmd()
    .args(["build-dependencies", "--force-rebuild"])
    .assert()
    .success();

  assert_eq!(env.tool_log().iter().filter(|l| *l == "bootstrap").count(), 2);
}

#[test]
#[serial]
fn debug_dry_run_for_client() {
  let env = TestEnv::new();

  env
    .qtbuild_cmd()
    .args([
      "build-dependencies",
      "--build-type",
      "client",
      "--build-variant",
      "Debug",
      "--dry-run",
    ])
    .assert()
    .success();

  let install = env.tool_log().pop().unwrap();
  assert!(install.contains("client/build/vcpkg_installed"));
  assert!(install.contains("--dry-run"));
  assert!(install.ends_with("VCPKG_BUILD_TYPE=debug"));
}

#[test]
#[serial]
fn install_failure_exits_nonzero_with_command() {
  let env = TestEnv::new();

  env
    .qtbuild_cmd()
    .arg("build-dependencies")
    .env("FAKE_VCPKG_EXIT", "1")
    .assert()
    .failure()
    .stderr(predicate::str::contains("failed to install dependencies"))
    .stderr(predicate::str::contains("vcpkg install --triplet"));
}

#[test]
#[serial]
fn tool_output_is_streamed() {
  let env = TestEnv::new();

  env
    .qtbuild_cmd()
    .arg("build-dependencies")
    .assert()
    .success()
    .stdout(predicate::str::contains("Installing 1/1 zlib"));
}
