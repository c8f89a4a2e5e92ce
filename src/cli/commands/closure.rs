//! Closure command implementation.
//!
//! `pkglint closure <name>` prints every package reachable from `name`
//! through runtime dependencies, one per line.

use std::io::Write;

use tracing::{error, warn};

use crate::cli::args::ClosureArgs;
use crate::config::PkglintConfig;
use crate::depends::closure_of;
use crate::error::Result;
use crate::store::{MemoryStore, PackageStore};

use super::dispatcher::{Command, CommandResult};

/// The closure command implementation.
pub struct ClosureCommand {
    args: ClosureArgs,
    config: PkglintConfig,
}

impl ClosureCommand {
    /// Create a new closure command.
    pub fn new(args: ClosureArgs, config: PkglintConfig) -> Self {
        Self { args, config }
    }
}

impl Command for ClosureCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let Some(path) = self.args.db.as_ref().or(self.config.database.as_ref()) else {
            error!("No package database given; use --db or set `database` in the config");
            return Ok(CommandResult::failure(2));
        };

        let store = MemoryStore::load(path)?;
        if store.lookup(&self.args.name).is_none() {
            warn!("{} is not in the package database", self.args.name);
        }

        for name in closure_of(&store, &self.args.name) {
            writeln!(out, "{}", name)?;
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const DATABASE: &str = r#"
- name: glibc
- name: zlib
  depends: [glibc]
- name: libpng
  depends: [zlib, glibc]
"#;

    #[test]
    fn prints_sorted_closure() {
        let temp = TempDir::new().unwrap();
        let db = temp.path().join("db.yml");
        fs::write(&db, DATABASE).unwrap();

        let args = ClosureArgs {
            name: "libpng".to_string(),
            db: Some(db),
        };
        let mut out = Vec::new();
        let result = ClosureCommand::new(args, PkglintConfig::default())
            .execute(&mut out)
            .unwrap();

        assert!(result.success);
        assert_eq!(String::from_utf8(out).unwrap(), "glibc\nzlib\n");
    }

    #[test]
    fn missing_database_exits_two() {
        let args = ClosureArgs {
            name: "zlib".to_string(),
            db: None,
        };
        let result = ClosureCommand::new(args, PkglintConfig::default())
            .execute(&mut Vec::new())
            .unwrap();

        assert_eq!(result.exit_code, 2);
    }
}
