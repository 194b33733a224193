//! Set algebra between collections
//!
//! The two-operand operations take shared locks on both operands, always in
//! address order, and build a new independent collection. Results follow the
//! snapshot order of `self` first, then of `other`. `concat` locks its
//! operands one at a time instead.

use std::hash::Hash;

use parking_lot::RwLockReadGuard;

use super::table::Table;
use super::Collection;

/// Address used to order lock acquisition across collections
fn lock_rank<K, V>(collection: &Collection<K, V>) -> usize {
    collection as *const Collection<K, V> as *const () as usize
}

/// Shared guards for two collections, acquired in address order
///
/// Shared locks are recursive, so `a` and `b` may be the same collection.
pub(crate) fn read_pair<'a, K, V, O>(
    a: &'a Collection<K, V>,
    b: &'a Collection<K, O>,
) -> (
    RwLockReadGuard<'a, Table<K, V>>,
    RwLockReadGuard<'a, Table<K, O>>,
) {
    if lock_rank(a) <= lock_rank(b) {
        let first = a.read();
        let second = b.read();
        (first, second)
    } else {
        let second = b.read();
        let first = a.read();
        (first, second)
    }
}

impl<K: Eq + Hash + Clone, V: Clone> Collection<K, V> {
    /// Keys present in either; `self` wins where both have the key
    pub fn union(&self, other: &Self) -> Self {
        let (this, that) = read_pair(self, other);
        let mut result = (*this).clone();
        for (k, v) in that.iter() {
            if !result.contains(k) {
                result.insert(k.clone(), v.clone());
            }
        }
        Self::from_table(result)
    }

    /// Keys present in both, valued from `self`
    pub fn intersection<O>(&self, other: &Collection<K, O>) -> Self {
        let (this, that) = read_pair(self, other);
        let mut result = Table::new();
        for (k, v) in this.iter() {
            if that.contains(k) {
                result.insert(k.clone(), v.clone());
            }
        }
        Self::from_table(result)
    }

    /// Keys present in `self` but not in `other`
    pub fn difference<O>(&self, other: &Collection<K, O>) -> Self {
        let (this, that) = read_pair(self, other);
        let mut result = Table::new();
        for (k, v) in this.iter() {
            if !that.contains(k) {
                result.insert(k.clone(), v.clone());
            }
        }
        Self::from_table(result)
    }

    /// Keys present in exactly one of the two
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let (this, that) = read_pair(self, other);
        let mut result = Table::new();
        for (k, v) in this.iter() {
            if !that.contains(k) {
                result.insert(k.clone(), v.clone());
            }
        }
        for (k, v) in that.iter() {
            if !this.contains(k) {
                result.insert(k.clone(), v.clone());
            }
        }
        Self::from_table(result)
    }

    /// Clone of `self` overlaid with each of `others` in turn
    ///
    /// On key collisions the collection listed last wins. Operands are
    /// locked one at a time, so the result is not a single snapshot across
    /// all of them: a writer may change a later operand while an earlier one
    /// is being copied.
    pub fn concat(&self, others: &[&Self]) -> Self {
        let mut result = self.read().clone();
        for other in others {
            for (k, v) in other.read().iter() {
                result.insert(k.clone(), v.clone());
            }
        }
        Self::from_table(result)
    }
}

impl<K: Eq + Hash, V: PartialEq> Collection<K, V> {
    /// Same size and every key maps to an equal value in both
    pub fn equals(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        let (this, that) = read_pair(self, other);
        let equal = this.len() == that.len()
            && this
                .iter()
                .all(|(k, v)| that.get(k).is_some_and(|ov| ov == v));
        equal
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for Collection<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<K: Eq + Hash, V: Eq> Eq for Collection<K, V> {}
