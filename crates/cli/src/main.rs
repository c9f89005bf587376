mod cmd;
mod output;
mod prompts;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use qtbuild_lib::pipeline::{DependencyRequest, ProjectRequest};
use qtbuild_lib::{BuildTarget, BuildVariant};

use crate::output::print_error;

/// qtbuild - build vcpkg dependencies and CMake projects for server and client
#[derive(Parser)]
#[command(name = "qtbuild")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Project root (default: $QTBUILD_ROOT, then the current directory)
  #[arg(long, global = true)]
  root: Option<PathBuf>,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Bootstrap vcpkg and install a target's dependencies
  #[command(alias = "build_dependencies")]
  BuildDependencies(DependencyArgs),

  /// Configure and compile a target, or clean it
  #[command(alias = "build_project")]
  BuildProject(ProjectArgs),

  /// Show the project layout and what is built
  Status {
    /// Output as JSON
    #[arg(long)]
    json: bool,
  },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TargetArg {
  Server,
  Client,
}

impl From<TargetArg> for BuildTarget {
  fn from(arg: TargetArg) -> Self {
    match arg {
      TargetArg::Server => BuildTarget::Server,
      TargetArg::Client => BuildTarget::Client,
    }
  }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantArg {
  #[value(name = "Release")]
  Release,
  #[value(name = "Debug")]
  Debug,
}

impl From<VariantArg> for BuildVariant {
  fn from(arg: VariantArg) -> Self {
    match arg {
      VariantArg::Release => BuildVariant::Release,
      VariantArg::Debug => BuildVariant::Debug,
    }
  }
}

#[derive(Args)]
struct DependencyArgs {
  /// Which project's dependencies to install
  #[arg(long, value_enum, default_value_t = TargetArg::Server)]
  build_type: TargetArg,

  /// Build variant
  #[arg(long, value_enum, default_value_t = VariantArg::Release)]
  build_variant: VariantArg,

  /// Re-run the vcpkg bootstrap even if vcpkg is already built
  #[arg(long)]
  force_rebuild: bool,

  /// vcpkg triplet (default: derived from the host platform)
  #[arg(long)]
  triplet: Option<String>,

  /// Pass --dry-run through to vcpkg
  #[arg(long)]
  dry_run: bool,
}

impl From<DependencyArgs> for DependencyRequest {
  fn from(args: DependencyArgs) -> Self {
    DependencyRequest {
      target: args.build_type.into(),
      variant: args.build_variant.into(),
      triplet: args.triplet,
      force_rebuild: args.force_rebuild,
      dry_run: args.dry_run,
    }
  }
}

#[derive(Args)]
struct ProjectArgs {
  /// Which project to build
  #[arg(long, value_enum, default_value_t = TargetArg::Server)]
  build_type: TargetArg,

  /// Build variant
  #[arg(long, value_enum, default_value_t = VariantArg::Release)]
  build_variant: VariantArg,

  /// Accepted for compatibility; currently has no effect
  #[arg(long, alias = "disable_vcpkg")]
  disable_vcpkg: bool,

  /// Always let CMake run the vcpkg manifest install
  #[arg(long)]
  enable_install: bool,

  /// vcpkg triplet (default: derived from the host platform)
  #[arg(long)]
  triplet: Option<String>,

  /// Remove the build directory instead of building
  #[arg(long)]
  clean: bool,

  /// Build the test targets
  #[arg(long)]
  build_test: bool,

  /// CMake generator (default: the host's default generator)
  #[arg(long)]
  cmake_generator: Option<String>,
}

impl From<ProjectArgs> for ProjectRequest {
  fn from(args: ProjectArgs) -> Self {
    ProjectRequest {
      target: args.build_type.into(),
      variant: args.build_variant.into(),
      triplet: args.triplet,
      enable_install: args.enable_install,
      clean: args.clean,
      build_tests: args.build_test,
      generator: args.cmake_generator,
      disable_vcpkg: args.disable_vcpkg,
    }
  }
}

fn init_tracing(verbose: bool) {
  let default_level = if verbose { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false)
    .without_time()
    .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
  let root = cli.root.as_deref();

  match cli.command {
    Some(Commands::BuildDependencies(args)) => cmd::cmd_build_dependencies(root, args.into())?,
    Some(Commands::BuildProject(args)) => cmd::cmd_build_project(root, args.into())?,
    Some(Commands::Status { json }) => cmd::cmd_status(root, json)?,
    None if prompts::is_interactive() => cmd::cmd_build_all(root)?,
    None => {
      Cli::command().print_help()?;
      return Ok(ExitCode::FAILURE);
    }
  }

  Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  match run(cli) {
    Ok(code) => code,
    Err(e) => {
      print_error(&format!("{:#}", e));
      ExitCode::FAILURE
    }
  }
}
