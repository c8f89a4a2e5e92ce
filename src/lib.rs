//! pkglint - Package metadata and dependency linter.
//!
//! pkglint checks package descriptions against a set of rules. Its core is
//! the dependency coverage analysis in [`depends`]: given what a package
//! declares and what static analysis found it links against, it reports
//! missing, optional-only, redundant and unneeded dependencies.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.pkglint.yml` loading
//! - [`depends`] - Closure engine, provides resolver and coverage classifier
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Rules, registry, reports and output formatters
//! - [`package`] - Package descriptions and dependency specifications
//! - [`store`] - Package database lookups
//!
//! # Example
//!
//! ```
//! use pkglint::package::strip_depend_info;
//!
//! assert_eq!(strip_depend_info("glibc>=2.38").unwrap(), "glibc");
//! assert_eq!(strip_depend_info("python: for scripts").unwrap(), "python");
//! ```

pub mod cli;
pub mod config;
pub mod depends;
pub mod error;
pub mod lint;
pub mod package;
pub mod store;

pub use error::{PkglintError, Result};
