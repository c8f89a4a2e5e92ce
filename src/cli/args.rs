//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::lint::OutputFormat;

/// pkglint - Package metadata and dependency linter.
#[derive(Debug, Parser)]
#[command(name = "pkglint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .pkglint.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Lint package description files
    Check(CheckArgs),

    /// List available rules
    Rules,

    /// Print the transitive dependency closure of a package
    Closure(ClosureArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Package description files to lint
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Package database enabling the dependency rule
    #[arg(long, env = "PKGLINT_DB")]
    pub db: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Show informational notes
    #[arg(long)]
    pub info: bool,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Rules to skip (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,
}

/// Arguments for the `closure` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ClosureArgs {
    /// Package to start from
    pub name: String,

    /// Package database
    #[arg(long, env = "PKGLINT_DB")]
    pub db: Option<PathBuf>,
}
