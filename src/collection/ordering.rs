//! Ordering operations
//!
//! `sort` and `reverse` rearrange the snapshot order in place under the
//! exclusive lock; `to_sorted` and `to_reversed` work on a clone.

use std::cmp::Ordering;
use std::hash::Hash;

use tracing::debug;

use super::Collection;

/// Compare two values by their string form
///
/// Keys are ignored. Usable wherever a comparator is expected when no
/// domain-specific order exists: `collection.sort(default_compare)`.
pub fn default_compare<K, V: ToString>(a: &V, b: &V, _: &K, _: &K) -> Ordering {
    a.to_string().cmp(&b.to_string())
}

impl<K: Eq + Hash + Clone, V: Clone> Collection<K, V> {
    /// Stable sort by `compare(value_a, value_b, key_a, key_b)`
    ///
    /// Entries comparing equal keep their current relative order.
    pub fn sort<F>(&self, compare: F) -> &Self
    where
        F: FnMut(&V, &V, &K, &K) -> Ordering,
    {
        let mut table = self.write();
        table.sort_by(compare);
        debug!(label = ?self.label(), entries = table.len(), "collection sorted");
        self
    }

    /// Reverse the snapshot order
    pub fn reverse(&self) -> &Self {
        let mut table = self.write();
        table.reverse();
        debug!(label = ?self.label(), entries = table.len(), "collection reversed");
        self
    }

    /// Sorted copy; `self` is left untouched
    pub fn to_sorted<F>(&self, compare: F) -> Self
    where
        F: FnMut(&V, &V, &K, &K) -> Ordering,
    {
        let sorted = self.clone();
        sorted.sort(compare);
        sorted
    }

    /// Reversed copy; `self` is left untouched
    pub fn to_reversed(&self) -> Self {
        let reversed = self.clone();
        reversed.reverse();
        reversed
    }
}
