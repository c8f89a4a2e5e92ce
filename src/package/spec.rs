//! Dependency string normalization.
//!
//! Package metadata lists dependencies with optional version constraints
//! (`zlib>=1.2.11`) and, for optional dependencies, a trailing description
//! (`python: scripting support`). The analysis works on bare names only.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{PkglintError, Result};

/// Name, then an optional version constraint, then an optional description.
static DEPENDS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^<>=:]+)([<>]?=.*)?(: .*)?").expect("DEPENDS_REGEX must compile")
});

/// Strip version and description info from a dependency string.
///
/// `neon>=0.25.5-4` becomes `neon`, `python: for scripting` becomes `python`.
/// A string with no leading name (empty, or starting with one of `<>=:`)
/// is rejected.
pub fn strip_depend_info(value: &str) -> Result<String> {
    DEPENDS_REGEX
        .captures(value)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| PkglintError::InvalidDependencySpec {
            spec: value.to_string(),
        })
}

/// Normalize every entry of a dependency list, failing on the first bad one.
pub fn strip_all(values: &[String]) -> Result<Vec<String>> {
    values.iter().map(|v| strip_depend_info(v)).collect()
}
