//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`], which loads the configuration once and
//! hands it to whichever subcommand runs.

pub mod check;
pub mod closure;
pub mod dispatcher;
pub mod rules;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
