//! Ordered entry table
//!
//! Dense `Vec` of entries in snapshot order plus a key → position index.
//! Not synchronized; the owning [`Collection`](super::Collection) guards it.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// Unsynchronized ordered storage behind a collection
#[derive(Debug, Clone)]
pub(crate) struct Table<K, V> {
    /// Entries in snapshot order
    entries: Vec<(K, V)>,

    /// Position of every key inside `entries`
    index: HashMap<K, usize>,
}

impl<K, V> Table<K, V> {
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in snapshot order
    pub(crate) fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> + ExactSizeIterator {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Entry at a resolved (non-negative, in range) position
    pub(crate) fn entry_at(&self, position: usize) -> Option<(&K, &V)> {
        self.entries.get(position).map(|(k, v)| (k, v))
    }

    pub(crate) fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }
}

impl<K: Eq + Hash, V> Table<K, V> {
    pub(crate) fn new() -> Self {
        Self::with_capacity(0)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub(crate) fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.index.get(key) {
            Some(&pos) => Some(&mut self.entries[pos].1),
            None => None,
        }
    }

    pub(crate) fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Remove a key, keeping the relative order of the remaining entries
    pub(crate) fn remove(&mut self, key: &K) -> Option<V> {
        let pos = self.index.remove(key)?;
        let (_, value) = self.entries.remove(pos);
        self.reindex_from(pos);
        Some(value)
    }

    /// Keep only entries for which `keep` returns true; returns the number removed
    pub(crate) fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&K, &V) -> bool,
    {
        let before = self.entries.len();
        let index = &mut self.index;
        self.entries.retain(|(k, v)| {
            if keep(k, v) {
                true
            } else {
                index.remove(k);
                false
            }
        });
        let removed = before - self.entries.len();
        if removed > 0 {
            self.reindex_from(0);
        }
        removed
    }

    /// Stable sort of the entries; positions are rebuilt afterwards
    pub(crate) fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&V, &V, &K, &K) -> Ordering,
    {
        self.entries
            .sort_by(|(ka, va), (kb, vb)| compare(va, vb, ka, kb));
        self.reindex_from(0);
    }

    pub(crate) fn reverse(&mut self) {
        self.entries.reverse();
        self.reindex_from(0);
    }

    pub(crate) fn clear(&mut self) {
        self.entries = Vec::new();
        self.index = HashMap::new();
    }

    fn reindex_from(&mut self, start: usize) {
        for pos in start..self.entries.len() {
            if let Some(slot) = self.index.get_mut(&self.entries[pos].0) {
                *slot = pos;
            }
        }
    }
}

impl<K: Eq + Hash + Clone, V> Table<K, V> {
    /// Insert or overwrite; an overwritten key keeps its position
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.index.get(&key) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Insert `value`, or fold it into the existing value with `combine`
    pub(crate) fn upsert_with<F>(&mut self, key: K, value: V, combine: F)
    where
        F: FnOnce(V, V, &K) -> V,
    {
        let pos = match self.index.get(&key) {
            Some(&pos) => pos,
            None => {
                self.insert(key, value);
                return;
            }
        };

        // Move the slot to the tail so it can be taken by value, then put it back.
        let last = self.entries.len() - 1;
        self.entries.swap(pos, last);
        let Some((stored_key, existing)) = self.entries.pop() else {
            return;
        };
        let combined = combine(existing, value, &stored_key);
        self.entries.push((stored_key, combined));
        self.entries.swap(pos, last);
    }
}
