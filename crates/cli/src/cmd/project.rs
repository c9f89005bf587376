//! Implementation of the `qtbuild build-project` command.
//!
//! With `--clean` this only removes the target's build directory; otherwise it
//! configures the target with CMake and compiles it.

use std::path::Path;

use anyhow::{Context, Result};

use qtbuild_lib::exec::ProcessRunner;
use qtbuild_lib::pipeline::{Pipeline, ProjectRequest};
use qtbuild_lib::platform::Os;

use crate::output::print_report;

pub fn cmd_build_project(root: Option<&Path>, request: ProjectRequest) -> Result<()> {
  let paths = super::project_paths(root)?;
  let pipeline = Pipeline::new(&ProcessRunner, &paths, Os::current());

  let report = super::runtime()?
    .block_on(pipeline.build_project(&request))
    .context("build-project failed")?;

  let title = if request.clean { "Cleaned" } else { "Project built" };
  print_report(title, &report);
  Ok(())
}
