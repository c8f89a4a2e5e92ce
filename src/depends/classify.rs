//! Classification of declared against detected dependencies.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::debug;

use super::analyzed::AnalyzedPackage;
use super::closure::closure_of_set;
use super::provides::provides_for;
use super::tables::DependsTables;
use crate::lint::{LintDiagnostic, LintReport, RuleId, Severity};
use crate::store::PackageStore;

pub const COVERED_BY_LINK_DEPENDENCE: &str = "dependency-covered-by-link-dependence %s";
pub const DETECTED_BUT_OPTIONAL: &str = "dependency-detected-but-optional %s (%s)";
pub const DETECTED_NOT_INCLUDED: &str = "dependency-detected-not-included %s (%s)";
pub const ALREADY_SATISFIED: &str = "dependency-already-satisfied %s";
pub const NOT_NEEDED: &str = "dependency-not-needed %s";
pub const DEPENDS_SUMMARY: &str = "depends-by-static-analysis depends=(%s)";

/// Compares a package's declared dependencies with the detected ones.
#[derive(Clone)]
pub struct DependsAnalyzer {
    store: Arc<dyn PackageStore>,
    tables: DependsTables,
}

impl DependsAnalyzer {
    /// Create an analyzer over a package database and relationship tables.
    pub fn new(store: Arc<dyn PackageStore>, tables: DependsTables) -> Self {
        Self { store, tables }
    }

    /// The relationship tables in use.
    pub fn tables(&self) -> &DependsTables {
        &self.tables
    }

    /// The package database in use.
    pub fn store(&self) -> &dyn PackageStore {
        self.store.as_ref()
    }

    /// Classify a package's dependencies into errors, warnings and infos.
    pub fn classify(&self, pkg: &AnalyzedPackage) -> LintReport {
        let store = self.store.as_ref();
        let rule = RuleId::new("depends");
        let diag = |severity, template: &str| LintDiagnostic::new(rule.clone(), severity, template);
        let mut report = LintReport::new();

        let detected = pkg.detected_names();
        let indirect = closure_of_set(store, &detected);
        for name in &indirect {
            report.push(diag(Severity::Info, COVERED_BY_LINK_DEPENDENCE).with_arg(name));
        }

        let needed: BTreeSet<String> = detected
            .iter()
            .chain(&indirect)
            .chain(&pkg.custom_depends)
            .cloned()
            .collect();
        let smart: BTreeSet<String> = detected.difference(&indirect).cloned().collect();

        let implicit = closure_of_set(store, &pkg.declared_depends);
        let declared_closure: BTreeSet<String> =
            pkg.declared_depends.union(&implicit).cloned().collect();

        let mut opt_closure = pkg.declared_optdepends.clone();
        opt_closure.extend(closure_of_set(store, &pkg.declared_optdepends));

        let provides = provides_for(
            store,
            &self.tables,
            smart.union(&pkg.declared_depends),
        );
        let all_provides = provides.all_provided();

        debug!(
            "{}: {} detected, {} indirect, {} minimal, {} declared",
            pkg.name,
            detected.len(),
            indirect.len(),
            smart.len(),
            pkg.declared_depends.len()
        );

        for name in &smart {
            if *name == pkg.name
                || declared_closure.contains(name)
                || provides.intersects(name, &declared_closure)
                || all_provides.contains(name)
            {
                continue;
            }

            let reasons = pkg.reasons(name);
            if opt_closure.contains(name) || provides.intersects(name, &opt_closure) {
                report.push(
                    diag(Severity::Warning, DETECTED_BUT_OPTIONAL)
                        .with_arg(name)
                        .with_arg(reasons),
                );
            } else {
                report.push(
                    diag(Severity::Error, DETECTED_NOT_INCLUDED)
                        .with_arg(name)
                        .with_arg(reasons),
                );
            }
        }

        for name in &pkg.declared_depends {
            if self.tables.multilib_base(&pkg.name) == Some(name.as_str()) {
                continue;
            }
            if provides.intersects(name, &smart) {
                continue;
            }
            if implicit.contains(name) && (smart.contains(name) || indirect.contains(name)) {
                report.push(diag(Severity::Warning, ALREADY_SATISFIED).with_arg(name));
            } else if !needed.contains(name) && !all_provides.contains(name) {
                report.push(diag(Severity::Warning, NOT_NEEDED).with_arg(name));
            }
        }

        let summary: Vec<&str> = smart.iter().map(String::as_str).collect();
        report.push(diag(Severity::Info, DEPENDS_SUMMARY).with_arg(summary.join(" ")));

        report
    }
}

impl std::fmt::Debug for DependsAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependsAnalyzer")
            .field("store_len", &self.store.len())
            .field("tables", &self.tables)
            .finish()
    }
}
