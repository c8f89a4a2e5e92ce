//! Database package records.

use std::collections::BTreeSet;

use super::info::PackageInfo;

/// A package as known to the package database.
///
/// Records are immutable once loaded and shared by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageRecord {
    /// Package name.
    pub name: String,
    /// Package version, if known.
    pub version: Option<String>,
    /// Bare names of the packages this one depends on, in declared order.
    pub depends: Vec<String>,
    /// Capability names this package provides.
    pub provides: BTreeSet<String>,
}

impl PackageRecord {
    /// Create a record with no dependencies or provides.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the dependency list.
    pub fn with_depends<I, S>(mut self, depends: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.depends = depends.into_iter().map(Into::into).collect();
        self
    }

    /// Set the provided capabilities.
    pub fn with_provides<I, S>(mut self, provides: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.provides = provides.into_iter().map(Into::into).collect();
        self
    }

    /// Whether this package provides the given capability.
    pub fn provides(&self, capability: &str) -> bool {
        self.provides.contains(capability)
    }
}

impl From<&PackageInfo> for PackageRecord {
    fn from(info: &PackageInfo) -> Self {
        Self {
            name: info.name().to_string(),
            version: info.value("version").map(String::from),
            depends: info.depends().to_vec(),
            provides: info.provides().iter().cloned().collect(),
        }
    }
}
