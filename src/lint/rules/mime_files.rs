//! Shared MIME database files.

use crate::lint::{LintDiagnostic, LintReport, LintRule, RuleId, Severity};
use crate::package::{PackageInfo, PackageKind};

const MIME_DIR: &str = "usr/share/mime";

/// Checks packages shipping MIME definitions depend on and refresh the database.
pub struct MimeFilesRule;

impl LintRule for MimeFilesRule {
    fn id(&self) -> RuleId {
        RuleId::new("mimefiles")
    }

    fn name(&self) -> &str {
        "MIME Files"
    }

    fn description(&self) -> &str {
        "Check for files in /usr/share/mime"
    }

    fn kind(&self) -> PackageKind {
        PackageKind::Tarball
    }

    fn check(&self, package: &PackageInfo) -> LintReport {
        let mut report = LintReport::new();
        let files = package.files.as_deref().unwrap_or_default();

        let ships_mime = files.iter().any(|f| {
            let f = f.trim_end_matches('/');
            f == MIME_DIR || f.starts_with("usr/share/mime/")
        });
        if !ships_mime {
            return report;
        }

        if !package.depends().iter().any(|d| d == "shared-mime-info") {
            report.push(
                LintDiagnostic::new(self.id(), Severity::Error, "dependency-detected-not-included %s")
                    .with_arg("shared-mime-info"),
            );
        }

        let updates_cache = package
            .install_script
            .as_deref()
            .is_some_and(|script| script.contains("update-mime-database"));
        if !updates_cache {
            report.push(LintDiagnostic::new(self.id(), Severity::Error, "mime-cache-not-updated"));
        }

        report
    }
}
