//! The three-list result every lint rule returns.

use super::diagnostic::LintDiagnostic;
use super::rule::Severity;

/// Diagnostics of one rule run, split by severity.
///
/// Order within each list is the order the rule emitted them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    /// Problems that make the package incorrect.
    pub errors: Vec<LintDiagnostic>,
    /// Style and redundancy issues.
    pub warnings: Vec<LintDiagnostic>,
    /// Notes explaining the analysis.
    pub infos: Vec<LintDiagnostic>,
}

impl LintReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic to the list matching its severity.
    pub fn push(&mut self, diagnostic: LintDiagnostic) {
        match diagnostic.severity {
            Severity::Error => self.errors.push(diagnostic),
            Severity::Warning => self.warnings.push(diagnostic),
            Severity::Info => self.infos.push(diagnostic),
        }
    }

    /// Append every diagnostic of another report.
    pub fn merge(&mut self, other: LintReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.infos.extend(other.infos);
    }

    /// Errors, then warnings, then infos.
    pub fn iter(&self) -> impl Iterator<Item = &LintDiagnostic> {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .chain(self.infos.iter())
    }

    /// Total number of diagnostics.
    pub fn len(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.infos.len()
    }

    /// Whether the report holds no diagnostics at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the report has neither errors nor warnings.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Rendered messages of one severity, for compact assertions.
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        let list = match severity {
            Severity::Error => &self.errors,
            Severity::Warning => &self.warnings,
            Severity::Info => &self.infos,
        };
        list.iter().map(LintDiagnostic::message).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::RuleId;

    fn diag(severity: Severity, template: &str) -> LintDiagnostic {
        LintDiagnostic::new(RuleId::new("test"), severity, template)
    }

    #[test]
    fn push_sorts_by_severity() {
        let mut report = LintReport::new();
        report.push(diag(Severity::Error, "e"));
        report.push(diag(Severity::Warning, "w"));
        report.push(diag(Severity::Info, "i"));

        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.infos.len(), 1);
        assert_eq!(report.len(), 3);
        assert!(!report.is_clean());
    }

    #[test]
    fn iter_orders_errors_first() {
        let mut report = LintReport::new();
        report.push(diag(Severity::Info, "i"));
        report.push(diag(Severity::Error, "e"));

        let templates: Vec<_> = report.iter().map(|d| d.template.as_str()).collect();
        assert_eq!(templates, vec!["e", "i"]);
    }

    #[test]
    fn merge_appends() {
        let mut a = LintReport::new();
        a.push(diag(Severity::Warning, "w1"));
        let mut b = LintReport::new();
        b.push(diag(Severity::Warning, "w2"));

        a.merge(b);
        assert_eq!(a.messages(Severity::Warning), vec!["w1", "w2"]);
    }

    #[test]
    fn infos_only_is_clean() {
        let mut report = LintReport::new();
        report.push(diag(Severity::Info, "note"));
        assert!(report.is_clean());
        assert!(!report.is_empty());
    }

    #[test]
    fn default_is_empty() {
        assert!(LintReport::default().is_empty());
    }
}
