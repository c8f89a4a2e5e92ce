//! Lint output formatters.
//!
//! This module provides formatters for outputting lint reports
//! in different formats (human-readable, JSON).

pub mod human;
pub mod json;

use crate::lint::LintReport;
use std::io::Write;

/// Output format for lint results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// The report of one analyzed package.
#[derive(Debug, Clone)]
pub struct PackageReport {
    /// Name of the analyzed package.
    pub package: String,
    /// Diagnostics from every rule that ran.
    pub report: LintReport,
}

impl PackageReport {
    /// Pair a package name with its report.
    pub fn new(package: impl Into<String>, report: LintReport) -> Self {
        Self {
            package: package.into(),
            report,
        }
    }
}

/// Trait for formatting lint output.
pub trait LintFormatter {
    /// Format reports to the given writer.
    fn format<W: Write>(&self, reports: &[PackageReport], writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
