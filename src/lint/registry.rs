//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores all available lint rules and provides
//! methods for registering, retrieving, and running them.

use std::collections::BTreeMap;

use tracing::debug;

use super::report::LintReport;
use super::rule::{LintRule, RuleId};
use super::rules::{
    ChecksumsRule, DescriptionRule, ExtraVarsRule, GnomeMimeRule, InvalidStartdirRule,
    MimeFilesRule, SourceForgeUrlRule, TagsRule,
};
use crate::error::{PkglintError, Result};
use crate::package::PackageInfo;

/// Registry of all available lint rules, ordered by ID.
pub struct RuleRegistry {
    rules: BTreeMap<RuleId, Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Create a registry with all built-in rules.
    ///
    /// Note: the dependency rule ([`DependsRule`](super::DependsRule)) needs
    /// a package database and must be registered separately.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ChecksumsRule));
        registry.register(Box::new(DescriptionRule));
        registry.register(Box::new(ExtraVarsRule));
        registry.register(Box::new(GnomeMimeRule));
        registry.register(Box::new(InvalidStartdirRule));
        registry.register(Box::new(MimeFilesRule));
        registry.register(Box::new(SourceForgeUrlRule));
        registry.register(Box::new(TagsRule));
        registry
    }

    /// Register a lint rule.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        self.rules.insert(rule.id(), rule);
    }

    /// Remove rules by ID. Fails on the first ID that is not registered.
    pub fn disable<'a, I>(&mut self, ids: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for id in ids {
            if self.rules.remove(&RuleId::new(id)).is_none() {
                return Err(PkglintError::UnknownRule {
                    name: id.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules.get(id).map(|r| r.as_ref())
    }

    /// Iterate over all rules.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.values().map(|r| r.as_ref())
    }

    /// Run every rule that applies to the package's kind.
    pub fn check(&self, package: &PackageInfo) -> LintReport {
        let kind = package.kind();
        let mut report = LintReport::new();
        for rule in self.iter().filter(|rule| rule.kind() == kind) {
            debug!("Running rule {} on {}", rule.id(), package.name());
            report.merge(rule.check(package));
        }
        report
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{LintDiagnostic, Severity};
    use crate::package::PackageKind;

    struct MockRule {
        id: RuleId,
        kind: PackageKind,
    }

    impl LintRule for MockRule {
        fn id(&self) -> RuleId {
            self.id.clone()
        }
        fn name(&self) -> &str {
            "Mock Rule"
        }
        fn description(&self) -> &str {
            "A mock rule for testing"
        }
        fn kind(&self) -> PackageKind {
            self.kind
        }
        fn check(&self, _package: &PackageInfo) -> LintReport {
            let mut report = LintReport::new();
            report.push(LintDiagnostic::new(self.id(), Severity::Warning, "mock-finding"));
            report
        }
    }

    fn mock(id: &str, kind: PackageKind) -> Box<dyn LintRule> {
        Box::new(MockRule {
            id: RuleId::new(id),
            kind,
        })
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = RuleRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_register_and_get() {
        let mut registry = RuleRegistry::new();
        registry.register(mock("mock", PackageKind::BuildScript));

        assert!(!registry.is_empty());
        assert!(registry.get(&RuleId::new("mock")).is_some());
        assert!(registry.get(&RuleId::new("unknown")).is_none());
    }

    #[test]
    fn registry_iterates_in_id_order() {
        let mut registry = RuleRegistry::new();
        registry.register(mock("zeta", PackageKind::BuildScript));
        registry.register(mock("alpha", PackageKind::BuildScript));

        let ids: Vec<_> = registry.iter().map(|r| r.id().0).collect();
        assert_eq!(ids, vec!["alpha", "zeta"]);
    }

    #[test]
    fn check_runs_only_matching_kind() {
        let mut registry = RuleRegistry::new();
        registry.register(mock("script", PackageKind::BuildScript));
        registry.register(mock("archive", PackageKind::Tarball));

        let report = registry.check(&PackageInfo::default());

        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].rule_id, RuleId::new("script"));
    }

    #[test]
    fn disable_removes_rules() {
        let mut registry = RuleRegistry::with_builtins();
        let before = registry.len();

        registry.disable(["tags", "checksums"]).unwrap();

        assert_eq!(registry.len(), before - 2);
        assert!(registry.get(&RuleId::new("tags")).is_none());
    }

    #[test]
    fn disable_unknown_rule_fails() {
        let mut registry = RuleRegistry::with_builtins();
        let err = registry.disable(["nonexistent"]).unwrap_err();
        assert!(matches!(err, PkglintError::UnknownRule { .. }));
    }

    #[test]
    fn registry_with_builtins_has_rules() {
        let registry = RuleRegistry::with_builtins();
        assert_eq!(registry.len(), 8);
        for id in [
            "checksums",
            "description",
            "extravars",
            "gnomemime",
            "invalidstartdir",
            "mimefiles",
            "sfurl",
            "tags",
        ] {
            assert!(registry.get(&RuleId::new(id)).is_some(), "missing {}", id);
        }
        assert!(registry.get(&RuleId::new("depends")).is_none());
    }

    #[test]
    fn builtins_check_build_script_sources_and_body() {
        let mut info = PackageInfo::default()
            .with_var("name", ["foo"])
            .with_var("desc", ["A package"])
            .with_var("source", ["http://kent.dl.sourceforge.net/foo/foo-1.0.tar.gz"])
            .with_var("md5sums", ["SKIP"]);
        info.pkgbuild = vec![
            "# Maintainer: Someone".to_string(),
            "# Contributor: Someone".to_string(),
            "  make DESTDIR=\"$startdir/pkg\" install".to_string(),
        ];

        let report = RuleRegistry::with_builtins().check(&info);

        assert_eq!(report.messages(Severity::Error), vec!["use-pkgdir"]);
        assert_eq!(
            report.messages(Severity::Warning),
            vec!["specific-sourceforge-mirror"]
        );
    }
}
