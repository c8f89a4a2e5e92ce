//! Source checksum validation.
//!
//! This rule verifies that a build script carries checksums for its sources,
//! one per source, each well-formed for its algorithm.

use crate::lint::{LintDiagnostic, LintReport, LintRule, RuleId, Severity};
use crate::package::{PackageInfo, PackageKind};

/// Checksum variables and the hex length of their digests.
const CHECKSUMS: &[(&str, usize)] = &[
    ("md5sums", 32),
    ("sha1sums", 40),
    ("sha256sums", 64),
    ("sha384sums", 96),
    ("sha512sums", 128),
];

/// Verifies checksums are included in a build script.
pub struct ChecksumsRule;

impl ChecksumsRule {
    fn is_well_formed(checksum: &str, len: usize) -> bool {
        checksum.len() == len
            && checksum
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    }
}

impl LintRule for ChecksumsRule {
    fn id(&self) -> RuleId {
        RuleId::new("checksums")
    }

    fn name(&self) -> &str {
        "Checksums"
    }

    fn description(&self) -> &str {
        "Verifies checksums are included in a build script"
    }

    fn kind(&self) -> PackageKind {
        PackageKind::BuildScript
    }

    fn check(&self, package: &PackageInfo) -> LintReport {
        let mut report = LintReport::new();
        let sources = package.get("source").unwrap_or_default();

        if package.contains("source") && !CHECKSUMS.iter().any(|(var, _)| package.contains(var)) {
            report.push(LintDiagnostic::new(self.id(), Severity::Error, "missing-checksums"));
        }

        for (var, len) in CHECKSUMS {
            let Some(sums) = package.get(var) else {
                continue;
            };

            if sources.len() > sums.len() {
                report.push(
                    LintDiagnostic::new(self.id(), Severity::Error, "not-enough-checksums %s %i needed")
                        .with_arg(var)
                        .with_arg(sources.len()),
                );
            } else if sources.len() < sums.len() {
                report.push(
                    LintDiagnostic::new(self.id(), Severity::Error, "too-many-checksums %s %i needed")
                        .with_arg(var)
                        .with_arg(sources.len()),
                );
            }

            for sum in sums {
                if sum != "SKIP" && !Self::is_well_formed(sum, *len) {
                    report.push(
                        LintDiagnostic::new(self.id(), Severity::Error, "improper-checksum %s %s")
                            .with_arg(var)
                            .with_arg(sum),
                    );
                }
            }
        }

        report
    }
}
