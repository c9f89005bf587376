//! Pipeline coordination.
//!
//! Composes the stages into the three user-facing operations. Stages run
//! strictly one after another; the first failure ends the operation.

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::error::BuildError;
use crate::exec::CommandRunner;
use crate::paths::ProjectPaths;
use crate::platform::{Os, Triplet, resolve_triplet};
use crate::stages::configure::requested_generator;
use crate::stages::{self, CleanOutcome, ConfigureOptions, InstallOptions, ToolPreparation};
use crate::types::{BuildTarget, BuildVariant};

/// Options for `build-dependencies`.
#[derive(Debug, Clone, Default)]
pub struct DependencyRequest {
  pub target: BuildTarget,
  pub variant: BuildVariant,
  pub triplet: Option<String>,
  pub force_rebuild: bool,
  pub dry_run: bool,
}

/// Options for `build-project`.
#[derive(Debug, Clone, Default)]
pub struct ProjectRequest {
  pub target: BuildTarget,
  pub variant: BuildVariant,
  pub triplet: Option<String>,
  pub enable_install: bool,
  pub clean: bool,
  pub build_tests: bool,
  pub generator: Option<String>,
  /// Accepted for compatibility; no stage reads it.
  pub disable_vcpkg: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
  Dependencies,
  Clean,
  Configure,
  Compile,
}

impl StageKind {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Dependencies => "dependencies",
      Self::Clean => "clean",
      Self::Configure => "configure",
      Self::Compile => "compile",
    }
  }
}

#[derive(Debug, Clone)]
pub struct StageReport {
  pub stage: StageKind,
  pub elapsed: Duration,
  /// Short human-readable outcome, e.g. "vcpkg bootstrapped".
  pub note: Option<String>,
}

/// Stages completed by one operation, in order.
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
  pub target: BuildTarget,
  pub variant: BuildVariant,
  pub triplet: Option<Triplet>,
  pub stages: Vec<StageReport>,
}

impl PipelineReport {
  fn new(target: BuildTarget, variant: BuildVariant) -> Self {
    Self {
      target,
      variant,
      ..Default::default()
    }
  }

  fn record(&mut self, stage: StageKind, started: Instant, note: Option<String>) {
    let elapsed = started.elapsed();
    info!(stage = stage.as_str(), elapsed_ms = elapsed.as_millis() as u64, "stage finished");
    self.stages.push(StageReport { stage, elapsed, note });
  }

  pub fn ran(&self, stage: StageKind) -> bool {
    self.stages.iter().any(|s| s.stage == stage)
  }

  pub fn total_elapsed(&self) -> Duration {
    self.stages.iter().map(|s| s.elapsed).sum()
  }
}

/// Runs operations against one project layout with one runner.
pub struct Pipeline<'a, R> {
  runner: &'a R,
  paths: &'a ProjectPaths,
  os: Os,
}

impl<'a, R: CommandRunner> Pipeline<'a, R> {
  pub fn new(runner: &'a R, paths: &'a ProjectPaths, os: Os) -> Self {
    Self { runner, paths, os }
  }

  /// `build-dependencies`: resolve the triplet, then prepare vcpkg and install.
  pub async fn build_dependencies(&self, request: &DependencyRequest) -> Result<PipelineReport, BuildError> {
    let mut report = PipelineReport::new(request.target, request.variant);
    let triplet = resolve_triplet(request.triplet.as_deref(), self.os);
    info!(target = %request.target, triplet = %triplet, "building dependencies");

    let options = InstallOptions {
      target: request.target,
      variant: request.variant,
      triplet: triplet.clone(),
      force_rebuild_tool: request.force_rebuild,
      dry_run: request.dry_run,
    };

    let started = Instant::now();
    let outcome = stages::install(self.runner, self.paths, &options).await?;
    let note = match outcome.tool {
      ToolPreparation::Bootstrapped => "vcpkg bootstrapped",
      ToolPreparation::Updated => "vcpkg updated",
      ToolPreparation::Skipped => "vcpkg up to date",
    };
    report.triplet = Some(triplet);
    report.record(StageKind::Dependencies, started, Some(note.to_string()));

    Ok(report)
  }

  /// `build-project`: clean only, or configure then compile.
  pub async fn build_project(&self, request: &ProjectRequest) -> Result<PipelineReport, BuildError> {
    let mut report = PipelineReport::new(request.target, request.variant);

    if request.disable_vcpkg {
      warn!("--disable-vcpkg has no effect; dependencies still come from vcpkg");
    }

    if request.clean {
      let started = Instant::now();
      let note = match stages::clean(self.paths, request.target)? {
        CleanOutcome::Removed => "build directory removed",
        CleanOutcome::AlreadyClean => "already clean",
      };
      report.record(StageKind::Clean, started, Some(note.to_string()));
      return Ok(report);
    }

    let triplet = resolve_triplet(request.triplet.as_deref(), self.os);
    let options = ConfigureOptions {
      target: request.target,
      variant: request.variant,
      triplet: triplet.clone(),
      enable_install: request.enable_install,
      generator: requested_generator(request.generator.as_deref(), self.os),
      build_tests: request.build_tests,
    };
    report.triplet = Some(triplet);

    let started = Instant::now();
    let configured = stages::configure(self.runner, self.paths, &options).await?;
    let note = if configured.manifest_install {
      "manifest install enabled"
    } else {
      "manifest install disabled"
    };
    report.record(StageKind::Configure, started, Some(note.to_string()));

    let started = Instant::now();
    stages::compile(self.runner, self.paths, request.target, request.variant).await?;
    report.record(StageKind::Compile, started, None);

    Ok(report)
  }

  /// `build-all`: dependencies, then project, for the same target and variant.
  pub async fn build_all(&self, target: BuildTarget, variant: BuildVariant) -> Result<PipelineReport, BuildError> {
    let deps = self
      .build_dependencies(&DependencyRequest {
        target,
        variant,
        ..Default::default()
      })
      .await?;

    let project = self
      .build_project(&ProjectRequest {
        target,
        variant,
        ..Default::default()
      })
      .await?;

    let mut report = deps;
    report.stages.extend(project.stages);
    Ok(report)
  }
}
