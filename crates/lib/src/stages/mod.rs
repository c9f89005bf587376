//! Pipeline stages.
//!
//! Each stage decides what to do from a fresh look at the filesystem, launches
//! at most a couple of tools through a [`CommandRunner`](crate::exec::CommandRunner),
//! and maps a failing tool onto its own [`BuildError`](crate::error::BuildError) variant.

pub mod clean;
pub mod compile;
pub mod configure;
pub mod deps;

pub use clean::{CleanOutcome, clean};
pub use compile::{compile, compile_invocation};
pub use configure::{ConfigureOptions, ConfigureOutcome, configure, configure_invocation, manifest_install_enabled};
pub use deps::{InstallOptions, InstallOutcome, ToolPreparation, install, install_invocation, prepare_tool};
