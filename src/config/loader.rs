//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::schema::PkglintConfig;
use crate::error::{PkglintError, Result};

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = ".pkglint.yml";

/// Find the project config in `project_root`, if there is one.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file.
///
/// A relative `database` path is resolved against the config file's directory.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<PkglintConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PkglintError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PkglintError::Io(e)
        }
    })?;

    let mut config = parse_config(&content, path)?;
    if let (Some(database), Some(dir)) = (&config.database, path.parent()) {
        if database.is_relative() {
            config.database = Some(dir.join(database));
        }
    }

    debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Parse YAML content into a config.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<PkglintConfig> {
    if content.trim().is_empty() {
        return Ok(PkglintConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| PkglintError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An explicit path must exist. Without one, `.pkglint.yml` in the project
/// root is used when present, and defaults otherwise.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<PkglintConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => match find_project_config(project_root) {
            Some(path) => load_config_file(&path),
            None => Ok(PkglintConfig::default()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_project_config_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, PkglintConfig::default());
    }

    #[test]
    fn discovers_project_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "strict: true\n").unwrap();

        assert!(find_project_config(temp.path()).is_some());
        assert!(load_config(temp.path(), None).unwrap().strict);
    }

    #[test]
    fn explicit_config_must_exist() {
        let temp = TempDir::new().unwrap();
        let err = load_config(temp.path(), Some(&temp.path().join("nope.yml"))).unwrap_err();
        assert!(matches!(err, PkglintError::ConfigNotFound { .. }));
    }

    #[test]
    fn invalid_yaml_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.yml");
        fs::write(&path, "strict: [unclosed\n").unwrap();

        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, PkglintError::ConfigParseError { .. }));
    }

    #[test]
    fn relative_database_resolves_against_config_dir() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "database: db/packages.yml\n").unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.database, Some(temp.path().join("db/packages.yml")));
    }

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(
            parse_config("", Path::new("x.yml")).unwrap(),
            PkglintConfig::default()
        );
    }
}
