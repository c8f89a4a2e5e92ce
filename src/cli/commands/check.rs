//! Check command implementation.
//!
//! The `pkglint check` command loads each package description, runs every
//! applicable rule on it and prints the combined report.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, error};

use crate::cli::args::CheckArgs;
use crate::config::PkglintConfig;
use crate::depends::{DependsAnalyzer, DependsTables};
use crate::error::Result;
use crate::lint::{
    DependsRule, HumanFormatter, JsonFormatter, LintFormatter, OutputFormat, PackageReport,
    RuleRegistry,
};
use crate::package::PackageInfo;
use crate::store::{CachedStore, MemoryStore};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
    config: PkglintConfig,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs, config: PkglintConfig) -> Self {
        Self { args, config }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    fn format(&self) -> OutputFormat {
        self.args.format.unwrap_or(self.config.format)
    }

    fn strict(&self) -> bool {
        self.args.strict || self.config.strict
    }

    fn show_info(&self) -> bool {
        self.args.info || self.config.show_info
    }

    /// Built-in rules, plus the dependency rule when a database is known,
    /// minus everything disabled on the command line or in the config.
    fn build_registry(&self) -> Result<RuleRegistry> {
        let mut registry = RuleRegistry::with_builtins();

        let database = self.args.db.as_ref().or(self.config.database.as_ref());
        if let Some(path) = database {
            let store = CachedStore::new(MemoryStore::load(path)?);
            let analyzer = DependsAnalyzer::new(Arc::new(store), DependsTables::default());
            registry.register(Box::new(DependsRule::new(analyzer)));
        } else {
            debug!("No package database given, dependency rule disabled");
        }

        let has_depends = database.is_some();
        registry.disable(
            self.args
                .exclude
                .iter()
                .chain(&self.config.disabled_rules)
                .map(String::as_str)
                .filter(|id| has_depends || *id != "depends"),
        )?;

        Ok(registry)
    }

    fn package_name(info: &PackageInfo, path: &Path) -> String {
        if info.name().is_empty() {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default()
        } else {
            info.name().to_string()
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, mut out: &mut dyn Write) -> Result<CommandResult> {
        let registry = self.build_registry()?;

        let mut reports = Vec::new();
        let mut invalid = false;

        for path in &self.args.files {
            let info = match PackageInfo::load(path) {
                Ok(info) => info,
                Err(e) => {
                    error!("{}: {}", path.display(), e);
                    invalid = true;
                    continue;
                }
            };

            debug!("Checking {} as {}", path.display(), info.kind());
            let report = registry.check(&info);
            reports.push(PackageReport::new(Self::package_name(&info, path), report));
        }

        match self.format() {
            OutputFormat::Json => JsonFormatter::new().format(&reports, &mut out)?,
            OutputFormat::Human => {
                HumanFormatter::new(self.show_info()).format(&reports, &mut out)?
            }
        }

        if invalid {
            return Ok(CommandResult::failure(2));
        }

        let has_errors = reports.iter().any(|r| !r.report.errors.is_empty());
        let has_warnings = reports.iter().any(|r| !r.report.warnings.is_empty());

        if has_errors || (self.strict() && has_warnings) {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
