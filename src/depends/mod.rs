//! Dependency coverage analysis.
//!
//! Given what a package declares and what static analysis detected it
//! actually needs, report missing, optional-only, redundant and unneeded
//! dependencies.
//!
//! The analysis is built from three pieces:
//!
//! - [`closure_of`] / [`closure_of_set`] - transitive closure over the
//!   package database, cycle-safe and never containing the start name
//! - [`provides_for`] - capabilities each name satisfies, including the
//!   implicit ones from [`DependsTables`]
//! - [`DependsAnalyzer::classify`] - the classification itself
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use pkglint::depends::{AnalyzedPackage, DependsAnalyzer, DependsTables};
//! use pkglint::package::PackageRecord;
//! use pkglint::store::MemoryStore;
//!
//! let store = MemoryStore::new()
//!     .with(PackageRecord::new("a"))
//!     .with(PackageRecord::new("b").with_depends(["a"]));
//! let analyzer = DependsAnalyzer::new(Arc::new(store), DependsTables::default());
//!
//! let pkg = AnalyzedPackage::new("p")
//!     .detected("b", "uses libB")
//!     .depends(["a", "b"]);
//! let report = analyzer.classify(&pkg);
//!
//! assert!(report.errors.is_empty());
//! assert_eq!(report.warnings[0].message(), "dependency-already-satisfied a");
//! ```

pub mod analyzed;
pub mod classify;
pub mod closure;
pub mod provides;
pub mod tables;

pub use analyzed::AnalyzedPackage;
pub use classify::DependsAnalyzer;
pub use closure::{closure_of, closure_of_set};
pub use provides::{provides_for, ProvidesMap};
pub use tables::DependsTables;
