//! Package metadata.
//!
//! - [`PackageInfo`] - canonicalized metadata of the package under test
//! - [`PackageRecord`] - a package as stored in the package database
//! - [`strip_depend_info`] - reduce `name>=1.0` style strings to bare names

pub mod info;
pub mod record;
pub mod spec;

pub use info::{canonical_varname, PackageFile, PackageInfo, PackageKind};
pub use record::PackageRecord;
pub use spec::strip_depend_info;
