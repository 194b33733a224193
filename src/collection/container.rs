//! Collection handle
//!
//! Owns the table behind a `parking_lot::RwLock` and provides the
//! point operations (set/get/has/delete/clear), snapshots and `ensure`.

use std::fmt;
use std::hash::Hash;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, trace};

use super::table::Table;
use crate::config::Config;

/// Thread-safe ordered key → value collection
///
/// ## Concurrency:
/// - Accessors take a shared lock for their whole duration
/// - Mutators take the exclusive lock for their whole duration
/// - Shared locks are recursive, so a callback running under a shared lock
///   may call other read accessors on the same collection
/// - A callback must never call a mutator on the collection it is visiting
///
/// ## Ordering:
/// Snapshot order is insertion order. Overwriting a key keeps its position,
/// deleting a key keeps the order of the others, and `sort`/`reverse`
/// rearrange it permanently.
pub struct Collection<K, V> {
    /// Ordered storage (RwLock: many readers, one writer)
    inner: RwLock<Table<K, V>>,

    /// Optional name attached to tracing events
    label: Option<String>,
}

impl<K, V> Collection<K, V> {
    /// Shared access to the table (recursive, see type docs)
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Table<K, V>> {
        self.inner.read_recursive()
    }

    /// Exclusive access to the table
    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, Table<K, V>> {
        self.inner.write()
    }

    pub(crate) fn from_table(table: Table<K, V>) -> Self {
        Self {
            inner: RwLock::new(table),
            label: None,
        }
    }

    /// Label given through [`Config`], if any
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Current number of entries
    pub fn size(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Consume the collection, returning its entries in snapshot order
    pub fn into_entries(self) -> Vec<(K, V)> {
        self.inner.into_inner().into_entries()
    }
}

impl<K: Eq + Hash, V> Collection<K, V> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::from_table(Table::new())
    }

    /// Create an empty collection with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_table(Table::with_capacity(capacity))
    }

    /// Create an empty collection from a config
    ///
    /// The config is assumed valid; see [`Config::validate`].
    pub fn with_config(config: Config) -> Self {
        Self {
            inner: RwLock::new(Table::with_capacity(config.initial_capacity)),
            label: config.label,
        }
    }

    /// Check whether a key is present
    pub fn has(&self, key: &K) -> bool {
        self.read().contains(key)
    }

    /// True when every key is present; vacuously true for no keys
    pub fn has_all(&self, keys: &[K]) -> bool {
        let table = self.read();
        keys.iter().all(|k| table.contains(k))
    }

    /// True when at least one key is present; false for no keys
    pub fn has_any(&self, keys: &[K]) -> bool {
        let table = self.read();
        keys.iter().any(|k| table.contains(k))
    }

    /// Run `f` against the stored value without cloning it
    pub fn get_with<R, F>(&self, key: &K, f: F) -> Option<R>
    where
        F: FnOnce(&V) -> R,
    {
        self.read().get(key).map(f)
    }

    /// Remove a key; returns whether it existed
    ///
    /// Linear in the number of entries after the removed one, whose
    /// positions are shifted to keep snapshot order.
    pub fn delete(&self, key: &K) -> bool {
        let existed = self.write().remove(key).is_some();
        trace!(label = ?self.label, existed, "delete");
        existed
    }

    /// Remove every entry
    pub fn clear(&self) -> &Self {
        let mut table = self.write();
        let dropped = table.len();
        table.clear();
        debug!(label = ?self.label, dropped, "collection cleared");
        self
    }
}

impl<K: Eq + Hash + Clone, V> Collection<K, V> {
    /// Insert or overwrite a value
    pub fn set(&self, key: K, value: V) -> &Self {
        let replaced = self.write().insert(key, value).is_some();
        trace!(label = ?self.label, replaced, "set");
        self
    }

    /// Snapshot of the keys
    pub fn keys(&self) -> Vec<K> {
        self.read().iter().map(|(k, _)| k.clone()).collect()
    }
}

impl<K: Eq + Hash + Clone, V: Clone> Collection<K, V> {
    /// Clone of the stored value
    pub fn get(&self, key: &K) -> Option<V> {
        self.read().get(key).cloned()
    }

    /// Snapshot of the values
    pub fn values(&self) -> Vec<V> {
        self.read().iter().map(|(_, v)| v.clone()).collect()
    }

    /// Snapshot of the entries
    pub fn entries(&self) -> Vec<(K, V)> {
        self.read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Get the value for `key`, computing and storing it if absent
    ///
    /// `generator` runs with no lock held, so it may use this collection.
    /// Under contention it may run in several callers; the first value
    /// committed wins and every caller returns that stored value.
    pub fn ensure<F>(&self, key: K, generator: F) -> V
    where
        F: FnOnce(&K, &Self) -> V,
    {
        if let Some(value) = self.read().get(&key) {
            return value.clone();
        }

        let generated = generator(&key, self);

        let mut table = self.write();
        if let Some(existing) = table.get(&key) {
            debug!(label = ?self.label, "ensure lost race, generated value discarded");
            return existing.clone();
        }
        table.insert(key, generated.clone());
        generated
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<K: Eq + Hash, V> Default for Collection<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shallow copy: values are cloned with their own `Clone`, the label is not carried
impl<K: Clone, V: Clone> Clone for Collection<K, V> {
    fn clone(&self) -> Self {
        Self::from_table(self.read().clone())
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Collection<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.read().iter()).finish()
    }
}

impl<K: Eq + Hash + Clone, V> FromIterator<(K, V)> for Collection<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Table::new();
        for (k, v) in iter {
            table.insert(k, v);
        }
        Self::from_table(table)
    }
}

impl<K: Eq + Hash + Clone, V> From<Vec<(K, V)>> for Collection<K, V> {
    fn from(entries: Vec<(K, V)>) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Eq + Hash + Clone, V> Extend<(K, V)> for Collection<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let table = self.inner.get_mut();
        for (k, v) in iter {
            table.insert(k, v);
        }
    }
}
