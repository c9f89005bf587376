//! qtbuild-lib: build orchestration for the server and client projects.
//!
//! Drives two external tools, vcpkg for third-party dependencies and CMake for
//! configuring and compiling, through a fixed sequence of stages:
//! - `exec`: launching tools and capturing their output
//! - `platform`: host-derived triplet and generator defaults
//! - `paths`: the project directory layout
//! - `stages`: dependency install, configure, compile, clean
//! - `pipeline`: the user-facing operations composed from stages

pub mod consts;
pub mod error;
pub mod exec;
pub mod paths;
pub mod pipeline;
pub mod platform;
pub mod stages;
pub mod state;
pub mod types;
pub mod util;

pub use error::BuildError;
pub use types::{BuildTarget, BuildVariant};
