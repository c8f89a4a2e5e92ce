//! Package description presence.

use crate::lint::{LintDiagnostic, LintReport, LintRule, RuleId, Severity};
use crate::package::{PackageInfo, PackageKind};

/// Verifies that every package built by the script has a description.
pub struct DescriptionRule;

impl LintRule for DescriptionRule {
    fn id(&self) -> RuleId {
        RuleId::new("description")
    }

    fn name(&self) -> &str {
        "Description"
    }

    fn description(&self) -> &str {
        "Verifies that the description is set in a build script"
    }

    fn kind(&self) -> PackageKind {
        PackageKind::BuildScript
    }

    fn check(&self, package: &PackageInfo) -> LintReport {
        let mut report = LintReport::new();

        let packages: Vec<&PackageInfo> = if package.is_split() {
            package.subpackages.iter().collect()
        } else {
            vec![package]
        };

        for pkg in packages {
            if pkg.value("desc").is_none_or(str::is_empty) {
                report.push(LintDiagnostic::new(self.id(), Severity::Error, "missing-description"));
            }
        }

        report
    }
}
