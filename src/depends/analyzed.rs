//! The package under dependency analysis.

use std::collections::{BTreeMap, BTreeSet};

use super::tables::DependsTables;
use crate::package::PackageInfo;

/// Dependency view of the package being analyzed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzedPackage {
    /// Package name.
    pub name: String,
    /// Bare names from `depends`.
    pub declared_depends: BTreeSet<String>,
    /// Bare names from `optdepends`.
    pub declared_optdepends: BTreeSet<String>,
    /// Detector output: required name → reasons.
    pub detected_deps: BTreeMap<String, Vec<String>>,
    /// Packages required by name convention.
    pub custom_depends: BTreeSet<String>,
}

impl AnalyzedPackage {
    /// Create a package with nothing declared or detected.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Build the dependency view of canonical package metadata.
    pub fn from_info(info: &PackageInfo, tables: &DependsTables) -> Self {
        Self {
            name: info.name().to_string(),
            declared_depends: info.depends().iter().cloned().collect(),
            declared_optdepends: info.optdepends().iter().cloned().collect(),
            detected_deps: info.detected_deps.clone(),
            custom_depends: tables.custom_depends(info.name()),
        }
    }

    /// Add declared dependencies.
    pub fn depends<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declared_depends.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add declared optional dependencies.
    pub fn optdepends<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declared_optdepends
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Record a detected dependency and why it is needed.
    pub fn detected(mut self, name: &str, reason: &str) -> Self {
        self.detected_deps
            .entry(name.to_string())
            .or_default()
            .push(reason.to_string());
        self
    }

    /// Names of all detected dependencies.
    pub fn detected_names(&self) -> BTreeSet<String> {
        self.detected_deps.keys().cloned().collect()
    }

    /// Detection reasons for `name`, joined for display.
    pub fn reasons(&self, name: &str) -> String {
        self.detected_deps
            .get(name)
            .map(|reasons| reasons.join(", "))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_info_collects_declared_sets() {
        let mut info = PackageInfo::default()
            .with_var("name", ["mingw-w64-zlib"])
            .with_var("depends", ["b", "a", "a"])
            .with_var("optdepends", ["c"]);
        info.detected_deps
            .insert("a".to_string(), vec!["uses liba".to_string()]);

        let pkg = AnalyzedPackage::from_info(&info, &DependsTables::default());

        assert_eq!(pkg.name, "mingw-w64-zlib");
        assert_eq!(pkg.declared_depends.len(), 2);
        assert!(pkg.declared_optdepends.contains("c"));
        assert!(pkg.custom_depends.contains("mingw-w64-crt"));
        assert_eq!(pkg.reasons("a"), "uses liba");
    }

    #[test]
    fn reasons_are_joined() {
        let pkg = AnalyzedPackage::new("p")
            .detected("zlib", "libz.so.1 needed by usr/bin/a")
            .detected("zlib", "libz.so.1 needed by usr/bin/b");

        assert_eq!(
            pkg.reasons("zlib"),
            "libz.so.1 needed by usr/bin/a, libz.so.1 needed by usr/bin/b"
        );
        assert_eq!(pkg.reasons("missing"), "");
    }
}
