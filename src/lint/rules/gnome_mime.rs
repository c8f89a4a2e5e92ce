//! Generated MIME cache files.
//!
//! These files are regenerated on the target system and must not be shipped.

use crate::lint::{LintDiagnostic, LintReport, LintRule, RuleId, Severity};
use crate::package::{PackageInfo, PackageKind};

const GENERATED_MIME_FILES: &[&str] = &[
    "usr/share/applications/mimeinfo.cache",
    "usr/share/mime/XMLnamespaces",
    "usr/share/mime/aliases",
    "usr/share/mime/globs",
    "usr/share/mime/magic",
    "usr/share/mime/subclasses",
];

/// Checks for generated GNOME mime files.
pub struct GnomeMimeRule;

impl LintRule for GnomeMimeRule {
    fn id(&self) -> RuleId {
        RuleId::new("gnomemime")
    }

    fn name(&self) -> &str {
        "GNOME MIME Files"
    }

    fn description(&self) -> &str {
        "Checks for generated GNOME mime files"
    }

    fn kind(&self) -> PackageKind {
        PackageKind::Tarball
    }

    fn check(&self, package: &PackageInfo) -> LintReport {
        let mut report = LintReport::new();

        for file in package.files.as_deref().unwrap_or_default() {
            if GENERATED_MIME_FILES.contains(&file.as_str()) {
                report.push(
                    LintDiagnostic::new(self.id(), Severity::Error, "gnome-mime-file %s").with_arg(file),
                );
            }
        }

        report
    }
}
