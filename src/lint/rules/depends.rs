//! Dependency coverage rule.
//!
//! Wraps [`DependsAnalyzer`] so the dependency analysis runs alongside
//! every other rule.

use crate::depends::{AnalyzedPackage, DependsAnalyzer};
use crate::lint::{LintReport, LintRule, RuleId};
use crate::package::{PackageInfo, PackageKind};

/// Checks declared dependencies against detected ones.
pub struct DependsRule {
    analyzer: DependsAnalyzer,
}

impl DependsRule {
    /// Create a new depends rule with the given analyzer.
    pub fn new(analyzer: DependsAnalyzer) -> Self {
        Self { analyzer }
    }
}

impl LintRule for DependsRule {
    fn id(&self) -> RuleId {
        RuleId::new("depends")
    }

    fn name(&self) -> &str {
        "Dependencies"
    }

    fn description(&self) -> &str {
        "Checks dependencies semi-smartly"
    }

    fn kind(&self) -> PackageKind {
        PackageKind::Tarball
    }

    fn check(&self, package: &PackageInfo) -> LintReport {
        let pkg = AnalyzedPackage::from_info(package, self.analyzer.tables());
        self.analyzer.classify(&pkg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::depends::DependsTables;
    use crate::package::PackageRecord;
    use crate::store::MemoryStore;
    use std::sync::Arc;

    fn rule() -> DependsRule {
        let store = MemoryStore::new()
            .with(PackageRecord::new("glibc"))
            .with(PackageRecord::new("zlib").with_depends(["glibc"]));
        DependsRule::new(DependsAnalyzer::new(
            Arc::new(store),
            DependsTables::default(),
        ))
    }

    #[test]
    fn reports_missing_dependency() {
        let mut info = PackageInfo::default()
            .with_var("name", ["foo"])
            .with_var("depends", ["glibc"]);
        info.detected_deps.insert(
            "zlib".to_string(),
            vec!["libz.so.1 needed by usr/bin/foo".to_string()],
        );

        let report = rule().check(&info);

        assert_eq!(
            report.errors[0].message(),
            "dependency-detected-not-included zlib (libz.so.1 needed by usr/bin/foo)"
        );
    }

    #[test]
    fn clean_package_has_only_infos() {
        let mut info = PackageInfo::default()
            .with_var("name", ["foo"])
            .with_var("depends", ["zlib"]);
        info.detected_deps
            .insert("zlib".to_string(), vec!["uses libz".to_string()]);
        info.detected_deps
            .insert("glibc".to_string(), vec!["uses libc".to_string()]);

        let report = rule().check(&info);

        assert!(report.is_clean());
        assert_eq!(report.infos.len(), 2);
    }

    #[test]
    fn applies_to_tarballs() {
        assert_eq!(rule().kind(), PackageKind::Tarball);
        assert_eq!(rule().id(), RuleId::new("depends"));
    }
}
