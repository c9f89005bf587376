//! The no-subcommand convenience: dependencies then project, after confirmation.

use std::path::Path;

use anyhow::{Context, Result};

use qtbuild_lib::exec::ProcessRunner;
use qtbuild_lib::pipeline::Pipeline;
use qtbuild_lib::platform::Os;
use qtbuild_lib::{BuildTarget, BuildVariant};

use crate::output::{print_report, print_warning};
use crate::prompts::confirm;

pub fn cmd_build_all(root: Option<&Path>) -> Result<()> {
  let target = BuildTarget::default();
  let variant = BuildVariant::default();

  if !confirm(&format!("Build dependencies and project for {} ({})?", target, variant))? {
    print_warning("Nothing to do.");
    return Ok(());
  }

  let paths = super::project_paths(root)?;
  let pipeline = Pipeline::new(&ProcessRunner, &paths, Os::current());

  let report = super::runtime()?
    .block_on(pipeline.build_all(target, variant))
    .context("build-all failed")?;

  print_report("Build finished", &report);
  Ok(())
}
