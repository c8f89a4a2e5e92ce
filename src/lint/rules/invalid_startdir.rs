//! `$startdir` references in build scripts.
//!
//! `$srcdir` and `$pkgdir` replace `$startdir/src` and `$startdir/pkg`, and
//! nothing else should be read from the directory holding the build script.

use std::sync::LazyLock;

use regex::Regex;

use crate::lint::{LintDiagnostic, LintReport, LintRule, RuleId, Severity};
use crate::package::{PackageInfo, PackageKind};

/// `$startdir`, `${startdir}` or `$startdir"`, capturing what follows.
static STARTDIR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\$\{?startdir\}?"?(.*)"#).expect("STARTDIR_REGEX must compile")
});

/// Looks for `$startdir` references in the build script.
pub struct InvalidStartdirRule;

impl InvalidStartdirRule {
    fn tag(rest: &str) -> &'static str {
        if rest.starts_with("/pkg") {
            "use-pkgdir"
        } else if rest.starts_with("/src") {
            "use-srcdir"
        } else {
            "file-referred-in-startdir"
        }
    }
}

impl LintRule for InvalidStartdirRule {
    fn id(&self) -> RuleId {
        RuleId::new("invalidstartdir")
    }

    fn name(&self) -> &str {
        "Invalid startdir"
    }

    fn description(&self) -> &str {
        "Looks for references to $startdir"
    }

    fn kind(&self) -> PackageKind {
        PackageKind::BuildScript
    }

    fn check(&self, package: &PackageInfo) -> LintReport {
        let mut report = LintReport::new();

        // First reference on each line only.
        for line in &package.pkgbuild {
            if let Some(caps) = STARTDIR_REGEX.captures(line) {
                let rest = caps.get(1).map_or("", |m| m.as_str());
                report.push(LintDiagnostic::new(self.id(), Severity::Error, Self::tag(rest)));
            }
        }

        report
    }
}
