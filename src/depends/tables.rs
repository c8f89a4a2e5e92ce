//! Fixed relationship tables for the dependency analysis.
//!
//! Some relationships cannot be read from package metadata: an environment
//! package implicitly provides a runtime, cross-compiled packages always
//! need their C runtime, multilib packages depend on their native
//! counterpart. They live here as data so alternate tables can be passed
//! to [`DependsAnalyzer::new`](super::DependsAnalyzer::new).

use std::collections::{BTreeMap, BTreeSet};

use regex::Regex;

/// Built-in implicit provides: package → capabilities it satisfies.
pub const IMPLICIT_PROVIDES: &[(&str, &[&str])] = &[("java-environment", &["java-runtime"])];

/// Built-in name patterns and the packages they require.
pub const CUSTOM_DEPENDS: &[(&str, &[&str])] = &[("^mingw-", &["mingw-w64-crt"])];

/// Built-in multilib prefix.
pub const MULTILIB_PREFIX: &str = "lib32-";

/// Relationship tables consulted by the dependency analysis.
#[derive(Debug, Clone)]
pub struct DependsTables {
    implicit_provides: BTreeMap<String, BTreeSet<String>>,
    custom_depends: Vec<(Regex, Vec<String>)>,
    multilib_prefix: Option<String>,
}

impl DependsTables {
    /// Tables with no entries at all.
    pub fn empty() -> Self {
        Self {
            implicit_provides: BTreeMap::new(),
            custom_depends: Vec::new(),
            multilib_prefix: None,
        }
    }

    /// Add an implicit provides entry.
    pub fn with_implicit_provides<I, S>(mut self, package: &str, capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.implicit_provides
            .entry(package.to_string())
            .or_default()
            .extend(capabilities.into_iter().map(Into::into));
        self
    }

    /// Add a name-pattern rule. Returns an error if `pattern` is not a valid regex.
    pub fn with_custom_depends<I, S>(
        mut self,
        pattern: &str,
        packages: I,
    ) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let regex = Regex::new(pattern)?;
        self.custom_depends
            .push((regex, packages.into_iter().map(Into::into).collect()));
        Ok(self)
    }

    /// Set the multilib prefix (`None` disables the convention).
    pub fn with_multilib_prefix(mut self, prefix: Option<&str>) -> Self {
        self.multilib_prefix = prefix.map(String::from);
        self
    }

    /// Capabilities a package provides without declaring them.
    pub fn implicit_provides(&self, package: &str) -> Option<&BTreeSet<String>> {
        self.implicit_provides.get(package)
    }

    /// Extra packages required because of the package's name.
    pub fn custom_depends(&self, package_name: &str) -> BTreeSet<String> {
        self.custom_depends
            .iter()
            .filter(|(pattern, _)| pattern.is_match(package_name))
            .flat_map(|(_, packages)| packages.iter().cloned())
            .collect()
    }

    /// For a multilib package name, the native package it may depend on.
    ///
    /// `lib32-zlib` yields `zlib`; names without the prefix yield `None`.
    pub fn multilib_base<'a>(&self, package_name: &'a str) -> Option<&'a str> {
        let prefix = self.multilib_prefix.as_deref()?;
        package_name.strip_prefix(prefix)
    }
}

impl Default for DependsTables {
    fn default() -> Self {
        let mut tables = Self::empty().with_multilib_prefix(Some(MULTILIB_PREFIX));
        for (package, capabilities) in IMPLICIT_PROVIDES {
            tables = tables.with_implicit_provides(package, capabilities.iter().copied());
        }
        for (pattern, packages) in CUSTOM_DEPENDS {
            let regex = Regex::new(pattern).expect("CUSTOM_DEPENDS patterns must compile");
            tables
                .custom_depends
                .push((regex, packages.iter().map(|p| p.to_string()).collect()));
        }
        tables
    }
}
