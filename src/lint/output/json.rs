//! JSON output formatter.
//!
//! Formats lint reports as machine-readable JSON for tooling integration.
//! Each diagnostic keeps its template and payload next to the rendered
//! message.

use super::{LintFormatter, PackageReport};
use crate::lint::{LintDiagnostic, LintReport};
use serde::Serialize;
use std::io::Write;

/// Formats lint output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    packages: Vec<JsonPackage>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonPackage {
    package: String,
    errors: Vec<JsonDiagnostic>,
    warnings: Vec<JsonDiagnostic>,
    infos: Vec<JsonDiagnostic>,
}

#[derive(Serialize)]
struct JsonDiagnostic {
    rule_id: String,
    tag: String,
    template: String,
    args: Vec<String>,
    message: String,
}

#[derive(Serialize)]
struct JsonSummary {
    packages: usize,
    errors: usize,
    warnings: usize,
    infos: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }

    fn diagnostics(list: &[LintDiagnostic]) -> Vec<JsonDiagnostic> {
        list.iter()
            .map(|d| JsonDiagnostic {
                rule_id: d.rule_id.0.clone(),
                tag: d.tag().to_string(),
                template: d.template.clone(),
                args: d.args.clone(),
                message: d.message(),
            })
            .collect()
    }

    fn count(reports: &[PackageReport], list: impl Fn(&LintReport) -> usize) -> usize {
        reports.iter().map(|r| list(&r.report)).sum()
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(&self, reports: &[PackageReport], writer: &mut W) -> std::io::Result<()> {
        let packages = reports
            .iter()
            .map(|r| JsonPackage {
                package: r.package.clone(),
                errors: Self::diagnostics(&r.report.errors),
                warnings: Self::diagnostics(&r.report.warnings),
                infos: Self::diagnostics(&r.report.infos),
            })
            .collect();

        let summary = JsonSummary {
            packages: reports.len(),
            errors: Self::count(reports, |r| r.errors.len()),
            warnings: Self::count(reports, |r| r.warnings.len()),
            infos: Self::count(reports, |r| r.infos.len()),
        };

        let output = JsonOutput { packages, summary };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
