//! Error types for pkglint operations.
//!
//! This module defines [`PkglintError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Lint findings are never errors: they are reported as diagnostics
//! - Use `PkglintError` for invalid input that stops processing of one package
//! - Use `anyhow::Error` (via `PkglintError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pkglint operations.
#[derive(Debug, Error)]
pub enum PkglintError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Failed to parse a package database file.
    #[error("Failed to parse package database at {path}: {message}")]
    DatabaseParseError { path: PathBuf, message: String },

    /// Failed to parse a package description file.
    #[error("Failed to parse package at {path}: {message}")]
    PackageParseError { path: PathBuf, message: String },

    /// A dependency string could not be reduced to a bare package name.
    #[error("Invalid dependency specification: '{spec}'")]
    InvalidDependencySpec { spec: String },

    /// A rule name given on the command line or in config is not registered.
    #[error("Unknown rule: {name}")]
    UnknownRule { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pkglint operations.
pub type Result<T> = std::result::Result<T, PkglintError>;
