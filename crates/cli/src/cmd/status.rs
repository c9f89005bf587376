//! Status command implementation.
//!
//! Shows the resolved layout, host defaults and what is currently on disk for
//! each target.

use std::path::Path;

use anyhow::Result;

use qtbuild_lib::platform::{Os, Triplet, default_generator};
use qtbuild_lib::state::InstallState;

use crate::output::{format_bytes, print_info, print_json, print_stat, yes_no};

pub fn cmd_status(root: Option<&Path>, json: bool) -> Result<()> {
  let paths = super::project_paths(root)?;
  let os = Os::current();
  let triplet = Triplet::host_default(os);
  let generator = default_generator(os);
  let state = InstallState::observe(&paths);

  if json {
    let json_output = serde_json::json!({ "os": os, "default_triplet": triplet, "default_generator": generator, "paths": paths, "state": state });
    return print_json(&json_output);
  }

  print_info(&format!("Project root: {}", paths.project_root.display()));
  print_stat("Host", os.as_str());
  print_stat("Default triplet", triplet.as_str());
  print_stat("Default generator", generator);
  println!();
  print_info(&format!("vcpkg: {}", paths.vcpkg_root.display()));
  print_stat("Root present", yes_no(state.vcpkg_root_present));
  print_stat("Bootstrapped", yes_no(state.vcpkg_present));

  for target in &state.targets {
    println!();
    print_info(&format!("{}: {}", target.target, target.manifest_root.display()));
    print_stat("Source present", yes_no(target.manifest_root_present));
    print_stat("Configured", yes_no(target.build_dir_present));
    print_stat("Dependencies installed", yes_no(target.install_root_present));
    if target.build_dir_present {
      print_stat("Build size", &format_bytes(target.build_dir_bytes));
    }
  }

  Ok(())
}
