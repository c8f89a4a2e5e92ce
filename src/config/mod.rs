//! Configuration loading and parsing.
//!
//! - Schema definition in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use pkglint::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".pkglint.yml"), "disabled_rules: [tags]").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.disabled_rules, vec!["tags".to_string()]);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    find_project_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME,
};
pub use schema::PkglintConfig;
