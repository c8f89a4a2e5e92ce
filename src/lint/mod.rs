//! Package linting.
//!
//! This module provides package analysis through a pluggable rule-based
//! system.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Rules** - Individual checks ([`LintRule`] trait)
//! - **Registry** - Collection of all available rules ([`RuleRegistry`])
//! - **Reports** - Errors, warnings and infos from one run ([`LintReport`])
//! - **Diagnostics** - Tag templates with their payload ([`LintDiagnostic`])
//!
//! # Example
//!
//! ```
//! use pkglint::lint::{RuleRegistry, RuleId, Severity};
//!
//! let registry = RuleRegistry::with_builtins();
//! assert!(registry.get(&RuleId::new("checksums")).is_some());
//!
//! // Severity has ordering
//! assert!(Severity::Info < Severity::Warning);
//! assert!(Severity::Warning < Severity::Error);
//! ```

pub mod diagnostic;
pub mod output;
pub mod registry;
pub mod report;
pub mod rule;
pub mod rules;

pub use diagnostic::LintDiagnostic;
pub use output::{HumanFormatter, JsonFormatter, LintFormatter, OutputFormat, PackageReport};
pub use registry::RuleRegistry;
pub use report::LintReport;
pub use rule::{LintRule, RuleId, Severity};
pub use rules::{
    ChecksumsRule, DependsRule, DescriptionRule, ExtraVarsRule, GnomeMimeRule,
    InvalidStartdirRule, MimeFilesRule, SourceForgeUrlRule, TagsRule,
};
