//! Maintainer and contributor comments.

use std::sync::LazyLock;

use regex::Regex;

use crate::lint::{LintDiagnostic, LintReport, LintRule, RuleId, Severity};
use crate::package::{PackageInfo, PackageKind};

static CONTRIBUTOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#\s*Contributor\s*:").expect("CONTRIBUTOR_REGEX must compile")
});

static MAINTAINER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#\s*Maintainer\s*:").expect("MAINTAINER_REGEX must compile")
});

/// Looks for Maintainer and Contributor comments in the build script.
pub struct TagsRule;

impl LintRule for TagsRule {
    fn id(&self) -> RuleId {
        RuleId::new("tags")
    }

    fn name(&self) -> &str {
        "Tags"
    }

    fn description(&self) -> &str {
        "Looks for Maintainer and Contributor comments"
    }

    fn kind(&self) -> PackageKind {
        PackageKind::BuildScript
    }

    fn check(&self, package: &PackageInfo) -> LintReport {
        let mut report = LintReport::new();
        let lines = &package.pkgbuild;

        if !lines.iter().any(|line| CONTRIBUTOR_REGEX.is_match(line)) {
            report.push(LintDiagnostic::new(self.id(), Severity::Info, "missing-contributor"));
        }
        if !lines.iter().any(|line| MAINTAINER_REGEX.is_match(line)) {
            report.push(LintDiagnostic::new(self.id(), Severity::Warning, "missing-maintainer"));
        }

        report
    }
}
