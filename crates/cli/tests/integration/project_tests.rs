use predicates::prelude::*;
use serial_test::serial;

use crate::common::TestEnv;

#[test]
#[serial]
fn configure_then_compile() {
  let env = TestEnv::new();

  env
    .qtbuild_cmd()
    .args(["build-project", "--build-variant", "Debug"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Project built"));

  let log = env.tool_log();
  assert_eq!(log.len(), 2, "{log:?}");
  assert!(log[0].contains("-DCMAKE_BUILD_TYPE=Debug"));
  assert!(log[0].contains("-DVCPKG_MANIFEST_INSTALL=ON"));
  assert!(log[0].contains("scripts/buildsystems/vcpkg.cmake"));
  assert!(log[0].ends_with("server/build)"));
  assert!(log[1].starts_with("cmake --build . --config Debug"));
  assert!(env.root().join("server").join("build").is_dir());
}

#[test]
#[serial]
fn existing_install_root_disables_manifest_install() {
  let env = TestEnv::new();
  env.mkdir("client/build/vcpkg_installed");

  env
    .qtbuild_cmd()
    .args(["build-project", "--build-type", "client"])
    .assert()
    .success();

  assert!(env.tool_log()[0].contains("-DVCPKG_MANIFEST_INSTALL=OFF"));
}

#[test]
#[serial]
fn enable_install_overrides_detection() {
  let env = TestEnv::new();
  env.mkdir("client/build/vcpkg_installed");

  env
    .qtbuild_cmd()
    .args(["build-project", "--build-type", "client", "--enable-install"])
    .assert()
    .success();

  assert!(env.tool_log()[0].contains("-DVCPKG_MANIFEST_INSTALL=ON"));
}

#[test]
#[serial]
fn generator_comes_first() {
  let env = TestEnv::new();

  env
    .qtbuild_cmd()
    .args(["build-project", "--cmake-generator", "Ninja", "--build-test"])
    .assert()
    .success();

  let configure = &env.tool_log()[0];
  assert!(configure.starts_with("cmake -G Ninja "), "{configure}");
  assert!(configure.contains("-DBUILD_TEST=ON"));
}

#[test]
#[serial]
fn clean_does_not_touch_cmake() {
  let env = TestEnv::new();
  env.mkdir("server/build/CMakeFiles");

  env
    .qtbuild_cmd()
    .args(["build-project", "--clean"])
    .assert()
    .success();

  assert!(env.tool_log().is_empty());
  assert!(!env.root().join("server").join("build").exists());
}

#[test]
#[serial]
fn configure_failure_skips_compile() {
  let env = TestEnv::new();

  env
    .qtbuild_cmd()
    .arg("build-project")
    .env("FAKE_CMAKE_EXIT", "1")
    .assert()
    .failure()
    .stderr(predicate::str::contains("failed to configure project"))
    .stderr(predicate::str::contains("CMake Error: simulated failure"));

  assert_eq!(env.tool_log().len(), 1);
}
