//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::load_config;
use crate::error::Result;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing its report to `out`.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        let mut config = load_config(&self.project_root, cli.config.as_deref())?;
        if cli.verbose {
            config.show_info = true;
        }

        match &cli.command {
            Commands::Check(args) => {
                let cmd = super::check::CheckCommand::new(args.clone(), config);
                cmd.execute(out)
            }
            Commands::Rules => super::rules::RulesCommand::new(config).execute(out),
            Commands::Closure(args) => {
                let cmd = super::closure::ClosureCommand::new(args.clone(), config);
                cmd.execute(out)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn dispatcher_creation() {
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"));
        assert_eq!(dispatcher.project_root(), Path::new("/test"));
    }

    #[test]
    fn dispatches_rules() {
        let temp = TempDir::new().unwrap();
        let cli = Cli::try_parse_from(["pkglint", "rules"]).unwrap();
        let mut out = Vec::new();

        let result = CommandDispatcher::new(temp.path().to_path_buf())
            .dispatch(&cli, &mut out)
            .unwrap();

        assert!(result.success);
        assert!(String::from_utf8(out).unwrap().contains("checksums"));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.yml");
        let cli = Cli::try_parse_from([
            "pkglint",
            "--config",
            missing.to_str().unwrap(),
            "rules",
        ])
        .unwrap();

        let result = CommandDispatcher::new(temp.path().to_path_buf()).dispatch(&cli, &mut Vec::new());
        assert!(result.is_err());
    }
}
