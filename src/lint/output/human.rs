//! Human-readable output formatter.
//!
//! One line per diagnostic: `<package> E: <message>` (`W:` for warnings,
//! `I:` for infos).

use super::{LintFormatter, PackageReport};
use crate::lint::Severity;
use std::io::Write;

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    /// Whether informational notes are printed.
    pub show_info: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(show_info: bool) -> Self {
        Self { show_info }
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(&self, reports: &[PackageReport], writer: &mut W) -> std::io::Result<()> {
        for entry in reports {
            for diag in entry.report.iter() {
                if diag.severity == Severity::Info && !self.show_info {
                    continue;
                }
                writeln!(
                    writer,
                    "{} {}: {}",
                    entry.package,
                    diag.severity.letter(),
                    diag.message()
                )?;
            }
        }

        let error_count: usize = reports.iter().map(|r| r.report.errors.len()).sum();
        let warning_count: usize = reports.iter().map(|r| r.report.warnings.len()).sum();

        if error_count > 0 || warning_count > 0 {
            writeln!(
                writer,
                "Found {} error(s) and {} warning(s)",
                error_count, warning_count
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{LintDiagnostic, LintReport, RuleId};

    fn sample() -> Vec<PackageReport> {
        let mut report = LintReport::new();
        report.push(
            LintDiagnostic::new(RuleId::new("depends"), Severity::Error, "dependency-detected-not-included %s (%s)")
                .with_arg("zlib")
                .with_arg("uses libz"),
        );
        report.push(
            LintDiagnostic::new(RuleId::new("depends"), Severity::Warning, "dependency-not-needed %s")
                .with_arg("perl"),
        );
        report.push(
            LintDiagnostic::new(RuleId::new("depends"), Severity::Info, "depends-by-static-analysis depends=(%s)")
                .with_arg("zlib"),
        );
        vec![PackageReport::new("foo", report)]
    }

    fn render(formatter: HumanFormatter, reports: &[PackageReport]) -> String {
        let mut output = Vec::new();
        formatter.format(reports, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn formats_errors_and_warnings() {
        let output = render(HumanFormatter::new(false), &sample());

        assert!(output.contains("foo E: dependency-detected-not-included zlib (uses libz)"));
        assert!(output.contains("foo W: dependency-not-needed perl"));
        assert!(!output.contains("foo I:"));
    }

    #[test]
    fn shows_infos_when_requested() {
        let output = render(HumanFormatter::new(true), &sample());
        assert!(output.contains("foo I: depends-by-static-analysis depends=(zlib)"));
    }

    #[test]
    fn formats_summary_line() {
        let output = render(HumanFormatter::new(false), &sample());
        assert!(output.contains("Found 1 error(s) and 1 warning(s)"));
    }

    #[test]
    fn no_summary_when_no_issues() {
        let output = render(
            HumanFormatter::new(true),
            &[PackageReport::new("foo", LintReport::new())],
        );
        assert!(!output.contains("Found"));
    }
}
