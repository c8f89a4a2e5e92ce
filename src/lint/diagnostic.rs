//! Lint diagnostic messages.
//!
//! A [`LintDiagnostic`] keeps its message as a tag template with `%s` / `%i`
//! placeholders plus the payload that fills them, so presentation layers
//! can match on the tag (`dependency-not-needed`) and render the message
//! however they like.

use super::rule::{RuleId, Severity};

/// A diagnostic produced by a lint rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintDiagnostic {
    /// The rule that produced this diagnostic.
    pub rule_id: RuleId,
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Message template, e.g. `dependency-detected-not-included %s (%s)`.
    pub template: String,
    /// Payload substituted into the template placeholders, in order.
    pub args: Vec<String>,
}

impl LintDiagnostic {
    /// Create a new diagnostic with no payload.
    pub fn new(rule_id: RuleId, severity: Severity, template: impl Into<String>) -> Self {
        Self {
            rule_id,
            severity,
            template: template.into(),
            args: vec![],
        }
    }

    /// Append one payload value.
    pub fn with_arg(mut self, arg: impl ToString) -> Self {
        self.args.push(arg.to_string());
        self
    }

    /// The tag: the template up to its first space.
    pub fn tag(&self) -> &str {
        self.template
            .split_once(' ')
            .map_or(self.template.as_str(), |(tag, _)| tag)
    }

    /// Render the template with its payload.
    ///
    /// Placeholders without a matching argument are left as written.
    pub fn message(&self) -> String {
        let mut out = String::with_capacity(self.template.len());
        let mut args = self.args.iter();
        let mut chars = self.template.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '%' {
                if let Some(&spec) = chars.peek() {
                    if spec == 's' || spec == 'i' {
                        chars.next();
                        match args.next() {
                            Some(arg) => out.push_str(arg),
                            None => {
                                out.push('%');
                                out.push(spec);
                            }
                        }
                        continue;
                    }
                }
            }
            out.push(c);
        }

        out
    }
}
