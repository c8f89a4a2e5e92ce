//! Command-line interface for pkglint.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, ClosureArgs, Commands};
pub use commands::{Command, CommandDispatcher, CommandResult};
