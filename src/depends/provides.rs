//! Capability resolution for dependency names.

use std::collections::{BTreeMap, BTreeSet};

use super::tables::DependsTables;
use crate::store::PackageStore;

/// Package name → capabilities it provides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProvidesMap(BTreeMap<String, BTreeSet<String>>);

impl ProvidesMap {
    /// Capabilities of one package, if it was resolved.
    pub fn get(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.0.get(name)
    }

    /// Whether `name` was resolved (even with no capabilities).
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Whether any capability of `name` is in `names`.
    pub fn intersects(&self, name: &str, names: &BTreeSet<String>) -> bool {
        self.get(name)
            .is_some_and(|provided| !provided.is_disjoint(names))
    }

    /// Union of every resolved package's capabilities.
    pub fn all_provided(&self) -> BTreeSet<String> {
        self.0.values().flatten().cloned().collect()
    }

    /// Number of resolved packages.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing was resolved.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Resolve the capabilities each name provides.
///
/// Implicit provides from `tables` come first, then the database record's
/// own `provides`. Every requested name gets an entry, possibly empty.
pub fn provides_for<'a, I>(store: &dyn PackageStore, tables: &DependsTables, names: I) -> ProvidesMap
where
    I: IntoIterator<Item = &'a String>,
{
    let mut map = BTreeMap::new();
    for name in names {
        let mut provided = BTreeSet::new();
        if let Some(implicit) = tables.implicit_provides(name) {
            provided.extend(implicit.iter().cloned());
        }
        if let Some(record) = store.lookup(name) {
            provided.extend(record.provides.iter().cloned());
        }
        map.insert(name.clone(), provided);
    }
    ProvidesMap(map)
}
