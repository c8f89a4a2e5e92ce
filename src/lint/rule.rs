//! Lint rule definitions.
//!
//! This module provides the core traits and types for defining lint rules:
//!
//! - [`LintRule`] - The trait that all lint rules must implement
//! - [`RuleId`] - Unique identifier for a lint rule
//! - [`Severity`] - Severity level for diagnostics (Info, Warning, Error)

use super::report::LintReport;
use crate::package::{PackageInfo, PackageKind};

/// Unique identifier for a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level for lint diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Informational note, never blocks.
    Info,
    /// Style or redundancy issue.
    Warning,
    /// Correctness problem in the package.
    Error,
}

impl Severity {
    /// Single-letter tag used in human output.
    pub fn letter(self) -> char {
        match self {
            Severity::Info => 'I',
            Severity::Warning => 'W',
            Severity::Error => 'E',
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A lint rule that analyzes a package.
///
/// Every rule, from the dependency analysis to the simplest metadata
/// check, returns the same three-list [`LintReport`].
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Which kind of package input this rule applies to.
    fn kind(&self) -> PackageKind;

    /// Analyze the package and return its diagnostics.
    fn check(&self, package: &PackageInfo) -> LintReport;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_id_equality() {
        let id1 = RuleId::new("checksums");
        let id2 = RuleId::new("checksums");
        let id3 = RuleId::new("depends");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn rule_id_display() {
        let id = RuleId::new("depends");
        assert_eq!(format!("{}", id), "depends");
        assert_eq!(id.as_str(), "depends");
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn severity_display_and_letter() {
        assert_eq!(format!("{}", Severity::Info), "info");
        assert_eq!(format!("{}", Severity::Warning), "warning");
        assert_eq!(format!("{}", Severity::Error), "error");
        assert_eq!(Severity::Error.letter(), 'E');
        assert_eq!(Severity::Info.letter(), 'I');
    }
}
