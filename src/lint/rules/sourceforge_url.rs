//! SourceForge download URLs.
//!
//! Sources should go through the generic `downloads.sourceforge.net`
//! redirector rather than a pinned mirror.

use std::sync::LazyLock;

use regex::Regex;

use crate::lint::{LintDiagnostic, LintReport, LintRule, RuleId, Severity};
use crate::package::{PackageInfo, PackageKind};

static SPECIFIC_MIRROR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?|ftp)://\w+\.dl\.(?:sourceforge|sf)\.net")
        .expect("SPECIFIC_MIRROR_REGEX must compile")
});

static DL_REDIRECTOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:https?|ftp)://dl\.(?:sourceforge|sf)\.net")
        .expect("DL_REDIRECTOR_REGEX must compile")
});

/// Checks for proper SourceForge URLs.
pub struct SourceForgeUrlRule;

impl LintRule for SourceForgeUrlRule {
    fn id(&self) -> RuleId {
        RuleId::new("sfurl")
    }

    fn name(&self) -> &str {
        "SourceForge URL"
    }

    fn description(&self) -> &str {
        "Checks for proper SourceForge URLs"
    }

    fn kind(&self) -> PackageKind {
        PackageKind::BuildScript
    }

    fn check(&self, package: &PackageInfo) -> LintReport {
        let mut report = LintReport::new();

        for source in package.get("source").unwrap_or_default() {
            if SPECIFIC_MIRROR_REGEX.is_match(source) {
                report.push(LintDiagnostic::new(
                    self.id(),
                    Severity::Warning,
                    "specific-sourceforge-mirror",
                ));
            }
            if DL_REDIRECTOR_REGEX.is_match(source) {
                report.push(LintDiagnostic::new(
                    self.id(),
                    Severity::Warning,
                    "using-dl-sourceforge",
                ));
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_source(source: &str) -> PackageInfo {
        PackageInfo::default()
            .with_var("name", ["mypackage"])
            .with_var("source", [source])
    }

    #[test]
    fn specific_mirror_warns() {
        let info =
            with_source("ftp://heanet.dl.sourceforge.net/pub/m/mypackage/mypackage-0.1.tar.gz");
        let report = SourceForgeUrlRule.check(&info);

        assert!(report.errors.is_empty());
        assert!(report.infos.is_empty());
        assert_eq!(
            report.messages(Severity::Warning),
            vec!["specific-sourceforge-mirror"]
        );
    }

    #[test]
    fn dl_redirector_warns() {
        let report = SourceForgeUrlRule.check(&with_source("http://dl.sf.net/foo/foo-1.0.tar.gz"));
        assert_eq!(report.messages(Severity::Warning), vec!["using-dl-sourceforge"]);
    }

    #[test]
    fn generic_download_url_is_fine() {
        for source in [
            "https://downloads.sourceforge.net/mypackage/mypackage-0.1.tar.gz",
            "ftp://ftp.example.com/pub/mypackage-0.1.tar.gz",
            "mypackage.patch",
        ] {
            let report = SourceForgeUrlRule.check(&with_source(source));
            assert!(report.is_empty(), "{}", source);
        }
    }

    #[test]
    fn no_sources_is_fine() {
        assert!(SourceForgeUrlRule.check(&PackageInfo::default()).is_empty());
    }
}
