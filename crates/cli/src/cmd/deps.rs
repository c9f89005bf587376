//! Implementation of the `qtbuild build-dependencies` command.

use std::path::Path;

use anyhow::{Context, Result};

use qtbuild_lib::exec::ProcessRunner;
use qtbuild_lib::pipeline::{DependencyRequest, Pipeline};
use qtbuild_lib::platform::Os;

use crate::output::print_report;

/// Bootstrap vcpkg if needed and install the target's manifest dependencies.
pub fn cmd_build_dependencies(root: Option<&Path>, request: DependencyRequest) -> Result<()> {
  let paths = super::project_paths(root)?;
  let pipeline = Pipeline::new(&ProcessRunner, &paths, Os::current());

  let report = super::runtime()?
    .block_on(pipeline.build_dependencies(&request))
    .context("build-dependencies failed")?;

  let title = if request.dry_run {
    "Dependency dry run finished"
  } else {
    "Dependencies installed"
  };
  print_report(title, &report);
  Ok(())
}
