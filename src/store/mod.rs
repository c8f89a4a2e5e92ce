//! Package database access.
//!
//! The dependency analysis never owns package records; it queries a
//! [`PackageStore`] by name. Names the store does not know are treated as
//! leaves by every caller, so a lookup miss is a normal outcome.

pub mod cached;
pub mod memory;

use std::sync::Arc;

use crate::package::PackageRecord;

pub use cached::CachedStore;
pub use memory::MemoryStore;

/// Read-only package database.
pub trait PackageStore: Send + Sync {
    /// Find a package by exact name, falling back to the first package
    /// that provides `name`.
    fn lookup(&self, name: &str) -> Option<Arc<PackageRecord>>;

    /// Number of records in the store.
    fn len(&self) -> usize;

    /// Whether the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: PackageStore + ?Sized> PackageStore for Arc<S> {
    fn lookup(&self, name: &str) -> Option<Arc<PackageRecord>> {
        (**self).lookup(name)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
