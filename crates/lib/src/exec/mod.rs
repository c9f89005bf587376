//! External process execution.
//!
//! Every stage launches its tool through a [`CommandRunner`]. The production
//! implementation is [`ProcessRunner`]; tests substitute a recording runner.

pub mod runner;
pub mod types;

pub use runner::{CommandRunner, ProcessRunner, run_process};
pub use types::{CommandResult, ExecError, Invocation};
