//! Traversal and query operations
//!
//! Callbacks receive `(value, key, collection)` and run in snapshot order
//! while the shared lock is held. `sweep` is the exception: it runs under
//! the exclusive lock, so its predicate must not touch the collection.

use std::hash::Hash;

use tracing::debug;

use super::table::Table;
use super::Collection;

impl<K: Eq + Hash + Clone, V: Clone> Collection<K, V> {
    /// Visit every entry for its side effect
    pub fn each<F>(&self, mut f: F) -> &Self
    where
        F: FnMut(&V, &K, &Self),
    {
        let table = self.read();
        for (k, v) in table.iter() {
            f(v, k, self);
        }
        self
    }

    /// True if any entry passes; false on an empty collection
    pub fn some<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&V, &K, &Self) -> bool,
    {
        let table = self.read();
        let found = table.iter().any(|(k, v)| f(v, k, self));
        found
    }

    /// True if every entry passes; true on an empty collection
    pub fn every<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&V, &K, &Self) -> bool,
    {
        let table = self.read();
        let all = table.iter().all(|(k, v)| f(v, k, self));
        all
    }

    /// First value, in snapshot order, for which `f` returns true
    pub fn find<F>(&self, mut f: F) -> Option<V>
    where
        F: FnMut(&V, &K, &Self) -> bool,
    {
        let table = self.read();
        let found = table.iter().find(|&(k, v)| f(v, k, self)).map(|(_, v)| v.clone());
        found
    }

    /// First key, in snapshot order, for which `f` returns true
    pub fn find_key<F>(&self, mut f: F) -> Option<K>
    where
        F: FnMut(&V, &K, &Self) -> bool,
    {
        let table = self.read();
        let found = table.iter().find(|&(k, v)| f(v, k, self)).map(|(k, _)| k.clone());
        found
    }

    /// Like [`find`](Self::find), scanning from the end
    pub fn find_last<F>(&self, mut f: F) -> Option<V>
    where
        F: FnMut(&V, &K, &Self) -> bool,
    {
        let table = self.read();
        let found = table
            .iter()
            .rev()
            .find(|&(k, v)| f(v, k, self))
            .map(|(_, v)| v.clone());
        found
    }

    /// Like [`find_key`](Self::find_key), scanning from the end
    pub fn find_last_key<F>(&self, mut f: F) -> Option<K>
    where
        F: FnMut(&V, &K, &Self) -> bool,
    {
        let table = self.read();
        let found = table
            .iter()
            .rev()
            .find(|&(k, v)| f(v, k, self))
            .map(|(k, _)| k.clone());
        found
    }

    /// New collection holding the entries that pass
    pub fn filter<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&V, &K, &Self) -> bool,
    {
        let table = self.read();
        let mut result = Table::new();
        for (k, v) in table.iter() {
            if f(v, k, self) {
                result.insert(k.clone(), v.clone());
            }
        }
        Self::from_table(result)
    }

    /// Split into `(pass, fail)`; every entry lands in exactly one side
    pub fn partition<F>(&self, mut f: F) -> (Self, Self)
    where
        F: FnMut(&V, &K, &Self) -> bool,
    {
        let table = self.read();
        let mut pass = Table::new();
        let mut fail = Table::new();
        for (k, v) in table.iter() {
            if f(v, k, self) {
                pass.insert(k.clone(), v.clone());
            } else {
                fail.insert(k.clone(), v.clone());
            }
        }
        (Self::from_table(pass), Self::from_table(fail))
    }

    /// Delete, in place, every entry for which `f` returns true
    ///
    /// Holds the exclusive lock while calling `f`; the collection reference
    /// handed to `f` must not be used to access this collection. Runs in
    /// linear time, with one position rebuild after all removals.
    pub fn sweep<F>(&self, mut f: F) -> usize
    where
        F: FnMut(&V, &K, &Self) -> bool,
    {
        let removed = self.write().retain(|k, v| !f(v, k, self));
        debug!(label = ?self.label(), removed, "sweep removed entries");
        removed
    }

    /// Map every entry to a collection and union the results
    ///
    /// Sub-collections are applied in snapshot order, so when two of them
    /// produce the same key the later one wins.
    pub fn flat_map<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&V, &K, &Self) -> Self,
    {
        let table = self.read();
        let mut result = Table::new();
        for (k, v) in table.iter() {
            for (sub_k, sub_v) in f(v, k, self).into_entries() {
                result.insert(sub_k, sub_v);
            }
        }
        Self::from_table(result)
    }

    /// Run `f` on the collection itself and hand the collection back
    pub fn tap<F>(&self, f: F) -> &Self
    where
        F: FnOnce(&Self),
    {
        f(self);
        self
    }
}
