//! Transitive dependency closure.

use std::collections::{BTreeSet, VecDeque};

use tracing::trace;

use crate::store::PackageStore;

/// Everything reachable from `start` through `depends` edges, excluding `start`.
///
/// Cycles are broken by the visited set, so a package reachable from itself
/// never appears in its own closure. Names missing from the store are leaves.
pub fn closure_of(store: &dyn PackageStore, start: &str) -> BTreeSet<String> {
    let mut covered: BTreeSet<String> = BTreeSet::new();
    let mut todo: VecDeque<String> = VecDeque::from([start.to_string()]);

    while let Some(name) = todo.pop_front() {
        if !covered.insert(name.clone()) {
            continue;
        }
        let Some(record) = store.lookup(&name) else {
            trace!("{} not in package database, treating as leaf", name);
            continue;
        };
        todo.extend(
            record
                .depends
                .iter()
                .filter(|dep| !covered.contains(*dep))
                .cloned(),
        );
    }

    covered.remove(start);
    covered
}

/// Union of [`closure_of`] for each start name, each computed independently.
///
/// A start name is only excluded from its own closure, so when one start
/// reaches another the reached one is part of the result.
pub fn closure_of_set<'a, I>(store: &dyn PackageStore, starts: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = &'a String>,
{
    starts
        .into_iter()
        .flat_map(|start| closure_of(store, start))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::PackageRecord;
    use crate::store::MemoryStore;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn chain_store() -> MemoryStore {
        MemoryStore::new()
            .with(PackageRecord::new("a").with_depends(["b"]))
            .with(PackageRecord::new("b").with_depends(["c"]))
            .with(PackageRecord::new("c"))
    }

    #[test]
    fn follows_chain() {
        let store = chain_store();
        assert_eq!(closure_of(&store, "a"), set(&["b", "c"]));
        assert_eq!(closure_of(&store, "c"), set(&[]));
    }

    #[test]
    fn two_node_cycle_terminates_without_self() {
        let store = MemoryStore::new()
            .with(PackageRecord::new("a").with_depends(["b"]))
            .with(PackageRecord::new("b").with_depends(["a"]));

        assert_eq!(closure_of(&store, "a"), set(&["b"]));
        assert_eq!(closure_of(&store, "b"), set(&["a"]));
    }

    #[test]
    fn self_loop_terminates_without_self() {
        let store = MemoryStore::new().with(PackageRecord::new("a").with_depends(["a"]));
        assert!(closure_of(&store, "a").is_empty());
    }

    #[test]
    fn longer_cycle_never_contains_origin() {
        let store = MemoryStore::new()
            .with(PackageRecord::new("x").with_depends(["y"]))
            .with(PackageRecord::new("y").with_depends(["z"]))
            .with(PackageRecord::new("z").with_depends(["x", "w"]))
            .with(PackageRecord::new("w"));

        for origin in ["x", "y", "z"] {
            let closure = closure_of(&store, origin);
            assert!(!closure.contains(origin));
            assert!(closure.contains("w"));
        }
    }

    #[test]
    fn unknown_name_is_a_leaf() {
        let store = chain_store();
        assert!(closure_of(&store, "missing").is_empty());

        let with_unknown = MemoryStore::new()
            .with(PackageRecord::new("a").with_depends(["ghost"]));
        assert_eq!(closure_of(&with_unknown, "a"), set(&["ghost"]));
    }

    #[test]
    fn unknown_start_does_not_expand_set_closure() {
        let store = chain_store();
        let base = closure_of_set(&store, &set(&["b"]));
        let with_unknown = closure_of_set(&store, &set(&["b", "missing"]));
        assert_eq!(base, with_unknown);
    }

    #[test]
    fn set_closure_keeps_cross_coverage() {
        let store = chain_store();
        // b is excluded from its own run but reached from a.
        assert_eq!(closure_of_set(&store, &set(&["a", "b"])), set(&["b", "c"]));
    }

    #[test]
    fn set_closure_is_monotonic() {
        let store = MemoryStore::new()
            .with(PackageRecord::new("a").with_depends(["b"]))
            .with(PackageRecord::new("b").with_depends(["a"]))
            .with(PackageRecord::new("c").with_depends(["d"]))
            .with(PackageRecord::new("d"));

        let s1 = set(&["a"]);
        let s2 = set(&["b", "c"]);
        let union: BTreeSet<String> = s1.union(&s2).cloned().collect();

        let combined = closure_of_set(&store, &union);
        let separate: BTreeSet<String> = closure_of_set(&store, &s1)
            .union(&closure_of_set(&store, &s2))
            .cloned()
            .collect();

        assert!(combined.is_superset(&separate));
    }

    #[test]
    fn diamond_is_visited_once() {
        let store = MemoryStore::new()
            .with(PackageRecord::new("top").with_depends(["left", "right"]))
            .with(PackageRecord::new("left").with_depends(["bottom"]))
            .with(PackageRecord::new("right").with_depends(["bottom"]))
            .with(PackageRecord::new("bottom"));

        assert_eq!(
            closure_of(&store, "top"),
            set(&["left", "right", "bottom"])
        );
    }
}
