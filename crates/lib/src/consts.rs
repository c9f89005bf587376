pub const APP_NAME: &str = "qtbuild";

/// Environment variable overriding the project anchor directory.
pub const ROOT_ENV: &str = "QTBUILD_ROOT";

/// Environment variable overriding the package-manager root.
pub const VCPKG_ROOT_ENV: &str = "QTBUILD_VCPKG_ROOT";

pub const SERVER_DIR: &str = "server";
pub const CLIENT_DIR: &str = "client";
pub const VCPKG_DIR: &str = "thirdparties/vcpkg";
pub const BUILD_DIR: &str = "build";
pub const INSTALL_DIR: &str = "vcpkg_installed";

/// Toolchain file shipped inside the package-manager root.
pub const VCPKG_TOOLCHAIN: &str = "scripts/buildsystems/vcpkg.cmake";

/// Environment toggle read by the package manager to pick a build variant.
pub const VCPKG_BUILD_TYPE_ENV: &str = "VCPKG_BUILD_TYPE";

pub const CMAKE: &str = "cmake";
