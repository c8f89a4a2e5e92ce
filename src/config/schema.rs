//! Configuration schema.

use std::path::PathBuf;

use serde::Deserialize;

use crate::lint::OutputFormat;

/// Settings read from `.pkglint.yml`.
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PkglintConfig {
    /// Package database file used by the dependency rule.
    pub database: Option<PathBuf>,

    /// Rule IDs that never run.
    pub disabled_rules: Vec<String>,

    /// Print informational notes.
    pub show_info: bool,

    /// Treat warnings as failures.
    pub strict: bool,

    /// Output format.
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config: PkglintConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, PkglintConfig::default());
        assert_eq!(config.format, OutputFormat::Human);
    }

    #[test]
    fn parses_all_fields() {
        let config: PkglintConfig = serde_yaml::from_str(
            r#"
database: /var/lib/pkglint/db.yml
disabled_rules: [tags, extravars]
show_info: true
strict: true
format: json
"#,
        )
        .unwrap();

        assert_eq!(config.database, Some(PathBuf::from("/var/lib/pkglint/db.yml")));
        assert_eq!(config.disabled_rules, vec!["tags", "extravars"]);
        assert!(config.show_info);
        assert!(config.strict);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<PkglintConfig, _> = serde_yaml::from_str("colour: true\n");
        assert!(result.is_err());
    }
}
