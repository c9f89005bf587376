mod all;
mod deps;
mod project;
mod status;

pub use all::cmd_build_all;
pub use deps::cmd_build_dependencies;
pub use project::cmd_build_project;
pub use status::cmd_status;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use qtbuild_lib::paths::{ProjectPaths, project_root};
use qtbuild_lib::platform::Os;

/// Resolve the project layout for this invocation.
fn project_paths(root: Option<&Path>) -> Result<ProjectPaths> {
  let root = project_root(root).context("Failed to resolve project root")?;
  let paths = ProjectPaths::new(&root, Os::current());
  debug!(root = %paths.project_root.display(), vcpkg = %paths.vcpkg_root.display(), "resolved project layout");
  Ok(paths)
}

/// Stages run one process at a time, so a single-threaded runtime is enough.
fn runtime() -> Result<tokio::runtime::Runtime> {
  tokio::runtime::Builder::new_current_thread()
    .enable_all()
    .build()
    .context("Failed to create async runtime")
}
