//! Memoizing store wrapper.
//!
//! Closure computations query the same packages over and over, both within
//! one analysis and across packages in a run. [`CachedStore`] remembers
//! every answer, misses included.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::PackageStore;
use crate::package::PackageRecord;

/// Caches lookups of an inner store.
pub struct CachedStore<S> {
    inner: S,
    cache: Mutex<HashMap<String, Option<Arc<PackageRecord>>>>,
}

impl<S: PackageStore> CachedStore<S> {
    /// Wrap a store.
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// The wrapped store.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Number of distinct names looked up so far.
    pub fn cached_len(&self) -> usize {
        self.cache.lock().map(|c| c.len()).unwrap_or(0)
    }
}

impl<S: PackageStore> PackageStore for CachedStore<S> {
    fn lookup(&self, name: &str) -> Option<Arc<PackageRecord>> {
        // A poisoned cache only loses memoization; the inner store still answers.
        let Ok(mut cache) = self.cache.lock() else {
            return self.inner.lookup(name);
        };
        if let Some(hit) = cache.get(name) {
            return hit.clone();
        }
        let found = self.inner.lookup(name);
        cache.insert(name.to_string(), found.clone());
        found
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}
