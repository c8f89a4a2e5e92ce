//! Package metadata as seen by lint rules.
//!
//! A [`PackageInfo`] is built once from a [`PackageFile`] (the YAML or JSON
//! description of a build script or a built package). Variable names are
//! canonicalized at construction, so rules always use the canonical name
//! (`name`, `depends`, `desc`, ...) and never see aliases.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_yaml::Value;

use super::spec::strip_all;
use crate::error::{PkglintError, Result};

/// Alias → canonical variable name.
pub const CANONICAL_ALIASES: &[(&str, &str)] = &[
    ("pkgname", "name"),
    ("pkgbase", "base"),
    ("pkgver", "version"),
    ("md5sum", "md5sums"),
    ("sha1sum", "sha1sums"),
    ("depend", "depends"),
    ("pkgdesc", "desc"),
    ("size", "isize"),
    ("optdepend", "optdepends"),
    ("license", "licenses"),
];

/// Variables that hold a single value; only the first entry is kept.
const SCALAR_VARS: &[&str] = &[
    "base",
    "name",
    "version",
    "desc",
    "url",
    "builddate",
    "packager",
    "install",
    "filename",
    "csize",
    "isize",
    "pkgfunction",
];

/// Dependency-like variables reduced to bare names.
const DEPEND_VARS: &[&str] = &["depends", "makedepends", "optdepends", "provides"];

/// Map a variable name to its canonical form.
pub fn canonical_varname(varname: &str) -> &str {
    CANONICAL_ALIASES
        .iter()
        .find(|(alias, _)| *alias == varname)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(varname)
}

/// Raw package description as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageFile {
    /// Output of the static dependency detector: name → reasons.
    #[serde(default)]
    pub detected_deps: BTreeMap<String, Vec<String>>,

    /// Archive contents. Present only for built packages.
    #[serde(default)]
    pub files: Option<Vec<String>>,

    /// Contents of the package install script.
    #[serde(default)]
    pub install_script: Option<String>,

    /// Raw build script text.
    #[serde(default)]
    pub pkgbuild: Option<String>,

    /// Variables the build script assigns.
    #[serde(default)]
    pub setvars: Vec<String>,

    /// Split packages built from the same script.
    #[serde(default)]
    pub subpackages: Vec<PackageFile>,

    /// Every other package variable.
    #[serde(flatten)]
    pub vars: BTreeMap<String, Value>,
}

impl PackageFile {
    /// Parse a package description from YAML (or JSON) text.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| PkglintError::PackageParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read and parse a package description file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content, path)
    }
}

/// What kind of artifact a package description came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageKind {
    /// A build script (variables, source list, raw script text).
    BuildScript,
    /// A built package archive (file list, install script).
    Tarball,
}

impl std::fmt::Display for PackageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackageKind::BuildScript => write!(f, "build script"),
            PackageKind::Tarball => write!(f, "tarball"),
        }
    }
}

/// Canonicalized package metadata.
#[derive(Debug, Clone, Default)]
pub struct PackageInfo {
    vars: BTreeMap<String, Vec<String>>,
    /// Output of the static dependency detector: name → reasons.
    pub detected_deps: BTreeMap<String, Vec<String>>,
    /// Archive contents, for built packages.
    pub files: Option<Vec<String>>,
    /// Install script contents, if the package ships one.
    pub install_script: Option<String>,
    /// Build script lines, with line continuations joined.
    pub pkgbuild: Vec<String>,
    /// Variables the build script assigns.
    pub setvars: Vec<String>,
    /// Split packages.
    pub subpackages: Vec<PackageInfo>,
}

impl PackageInfo {
    /// Build canonical metadata from a raw description.
    ///
    /// Fails with [`PkglintError::InvalidDependencySpec`] when a dependency
    /// entry cannot be reduced to a bare name.
    pub fn from_file(file: PackageFile, path: &Path) -> Result<Self> {
        let mut vars: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (key, value) in file.vars {
            let values = value_to_strings(&key, value, path)?;
            vars.insert(canonical_varname(&key).to_string(), values);
        }

        for scalar in SCALAR_VARS {
            if let Some(values) = vars.get_mut(*scalar) {
                values.truncate(1);
            }
        }

        for var in DEPEND_VARS {
            if let Some(original) = vars.get(*var).cloned() {
                let stripped = strip_all(&original)?;
                vars.insert(format!("orig_{}", var), original);
                vars.insert(var.to_string(), stripped);
            }
        }

        if !vars.contains_key("name") {
            if let Some(base) = vars.get("base").cloned() {
                vars.insert("name".to_string(), base);
            }
        }

        let pkgbuild = file
            .pkgbuild
            .map(|text| text.replace("\\\n", " ").lines().map(String::from).collect())
            .unwrap_or_default();

        let subpackages = file
            .subpackages
            .into_iter()
            .map(|sub| Self::from_file(sub, path))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            vars,
            detected_deps: file.detected_deps,
            files: file.files,
            install_script: file.install_script,
            pkgbuild,
            setvars: file.setvars,
            subpackages,
        })
    }

    /// Read, parse and canonicalize a package description file.
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_file(PackageFile::load(path)?, path)
    }

    /// Builder used by tests and library callers: set a variable.
    pub fn with_var<I, S>(mut self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vars.insert(
            canonical_varname(key).to_string(),
            values.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// All values of a canonical variable.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.vars.get(key).map(Vec::as_slice)
    }

    /// First value of a canonical variable.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.vars.get(key)?.first().map(String::as_str)
    }

    /// Whether a canonical variable is set.
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Package name, empty when the description has none.
    pub fn name(&self) -> &str {
        self.value("name").unwrap_or_default()
    }

    /// Declared dependencies, as bare names.
    pub fn depends(&self) -> &[String] {
        self.get("depends").unwrap_or_default()
    }

    /// Declared optional dependencies, as bare names.
    pub fn optdepends(&self) -> &[String] {
        self.get("optdepends").unwrap_or_default()
    }

    /// Declared provided capabilities, as bare names.
    pub fn provides(&self) -> &[String] {
        self.get("provides").unwrap_or_default()
    }

    /// Whether this is a split package with subpackages.
    pub fn is_split(&self) -> bool {
        !self.subpackages.is_empty()
    }

    /// The kind of artifact this metadata describes.
    pub fn kind(&self) -> PackageKind {
        if self.files.is_some() {
            PackageKind::Tarball
        } else {
            PackageKind::BuildScript
        }
    }
}

fn value_to_strings(key: &str, value: Value, path: &Path) -> Result<Vec<String>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Sequence(items) => items
            .into_iter()
            .map(|item| scalar_to_string(key, item, path))
            .collect(),
        other => scalar_to_string(key, other, path).map(|s| vec![s]),
    }
}

/// Only YAML strings are accepted: re-rendering a parsed number or bool
/// loses its source text (`1.10` reads back as `1.1`).
fn scalar_to_string(key: &str, value: Value, path: &Path) -> Result<String> {
    let message = match value {
        Value::String(s) => return Ok(s),
        Value::Number(n) => format!(
            "variable '{}' has unquoted number {}; quote it to keep its exact text",
            key, n
        ),
        Value::Bool(b) => format!(
            "variable '{}' has unquoted boolean {}; quote it to keep its exact text",
            key, b
        ),
        _ => format!("variable '{}' must be a string or a list of strings", key),
    };
    Err(PkglintError::PackageParseError {
        path: path.to_path_buf(),
        message,
    })
}
