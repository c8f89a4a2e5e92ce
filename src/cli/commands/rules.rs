//! Rules command implementation.
//!
//! The `pkglint rules` command lists every rule `check` knows about.

use std::io::Write;
use std::sync::Arc;

use crate::config::PkglintConfig;
use crate::depends::{DependsAnalyzer, DependsTables};
use crate::error::Result;
use crate::lint::{DependsRule, RuleRegistry};
use crate::store::MemoryStore;

use super::dispatcher::{Command, CommandResult};

/// The rules command implementation.
pub struct RulesCommand {
    config: PkglintConfig,
}

impl RulesCommand {
    /// Create a new rules command.
    pub fn new(config: PkglintConfig) -> Self {
        Self { config }
    }
}

impl Command for RulesCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let mut registry = RuleRegistry::with_builtins();
        // Listed for completeness; `check` only runs it with a database.
        registry.register(Box::new(DependsRule::new(DependsAnalyzer::new(
            Arc::new(MemoryStore::new()),
            DependsTables::default(),
        ))));

        for rule in registry.iter() {
            let id = rule.id();
            let disabled = self.config.disabled_rules.iter().any(|d| d == id.as_str());
            writeln!(
                out,
                "{:<12} {:<12} {}{}",
                id.as_str(),
                rule.kind().to_string(),
                rule.description(),
                if disabled { " (disabled)" } else { "" }
            )?;
        }

        Ok(CommandResult::success())
    }
}
