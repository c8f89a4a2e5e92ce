//! In-memory package database.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing::debug;

use super::PackageStore;
use crate::error::{PkglintError, Result};
use crate::package::{PackageFile, PackageInfo, PackageRecord};

/// A package database held entirely in memory.
///
/// Records keep their load order so that provider lookups are stable:
/// the first record providing a capability wins.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: Vec<Arc<PackageRecord>>,
    by_name: HashMap<String, usize>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record. A later record with the same name replaces the earlier one.
    pub fn insert(&mut self, record: PackageRecord) {
        let record = Arc::new(record);
        match self.by_name.get(&record.name) {
            Some(&index) => self.records[index] = record,
            None => {
                self.by_name.insert(record.name.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Builder form of [`MemoryStore::insert`].
    pub fn with(mut self, record: PackageRecord) -> Self {
        self.insert(record);
        self
    }

    /// Find the first package providing `capability`.
    pub fn find_provider(&self, capability: &str) -> Option<Arc<PackageRecord>> {
        self.records
            .iter()
            .find(|record| record.provides(capability))
            .cloned()
    }

    /// Parse a database from YAML (or JSON) text.
    ///
    /// The database is a list of package descriptions in the same format
    /// as analyzed packages; variable aliases and version constraints are
    /// normalized the same way.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let files: Vec<PackageFile> =
            serde_yaml::from_str(content).map_err(|e| PkglintError::DatabaseParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let store = files
            .into_iter()
            .map(|file| -> Result<PackageRecord> {
                let info = PackageInfo::from_file(file, path)?;
                if info.name().is_empty() {
                    return Err(PkglintError::DatabaseParseError {
                        path: path.to_path_buf(),
                        message: "package entry without a name".to_string(),
                    });
                }
                Ok(PackageRecord::from(&info))
            })
            .collect::<Result<Self>>()?;

        debug!("Loaded {} packages from {}", store.len(), path.display());
        Ok(store)
    }

    /// Read and parse a database file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read package database {}", path.display()))?;
        Self::parse(&content, path)
    }
}

impl FromIterator<PackageRecord> for MemoryStore {
    fn from_iter<T: IntoIterator<Item = PackageRecord>>(iter: T) -> Self {
        let mut store = Self::new();
        for record in iter {
            store.insert(record);
        }
        store
    }
}

impl PackageStore for MemoryStore {
    fn lookup(&self, name: &str) -> Option<Arc<PackageRecord>> {
        self.by_name
            .get(name)
            .map(|&index| Arc::clone(&self.records[index]))
            .or_else(|| self.find_provider(name))
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
