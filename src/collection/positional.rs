//! Positional and random access over the current snapshot order
//!
//! ## Count conventions
//! - `first_n(n)` / `last_n(n)`: `n == 0` → empty, negative `n` reads the
//!   opposite end, `n` beyond the size is clamped
//! - `at(i)` / `key_at(i)`: negative indices count from the end (`-1` = last)
//! - `random_n(n)`: distinct entries, `n <= 0` → empty, clamped to the size

use std::hash::Hash;
use std::ops::Range;

use rand::seq::index::sample as sample_indices;
use rand::Rng;

use super::Collection;

/// Positions covered by taking `n` entries from the front (negative: from the back)
fn head_span(len: usize, n: isize) -> Range<usize> {
    let count = n.unsigned_abs().min(len);
    if n >= 0 {
        0..count
    } else {
        len - count..len
    }
}

/// Positions covered by taking `n` entries from the back (negative: from the front)
fn tail_span(len: usize, n: isize) -> Range<usize> {
    let count = n.unsigned_abs().min(len);
    if n >= 0 {
        len - count..len
    } else {
        0..count
    }
}

/// Resolve a possibly negative index against `len`
fn resolve_index(len: usize, index: isize) -> Option<usize> {
    if index >= 0 {
        let position = index as usize;
        (position < len).then_some(position)
    } else {
        len.checked_sub(index.unsigned_abs())
    }
}

/// Number of distinct samples to draw for a requested amount
fn sample_count(len: usize, n: isize) -> usize {
    if n <= 0 {
        0
    } else {
        (n as usize).min(len)
    }
}

impl<K: Eq + Hash + Clone, V: Clone> Collection<K, V> {
    // =========================================================================
    // Front / Back
    // =========================================================================

    /// First value, `None` when empty
    pub fn first(&self) -> Option<V> {
        self.at(0)
    }

    /// Up to `n` values from the front
    pub fn first_n(&self, n: isize) -> Vec<V> {
        let table = self.read();
        let span = head_span(table.len(), n);
        let picked: Vec<_> = table
            .iter()
            .skip(span.start)
            .take(span.len())
            .map(|(_, v)| v.clone())
            .collect();
        picked
    }

    /// First key, `None` when empty
    pub fn first_key(&self) -> Option<K> {
        self.key_at(0)
    }

    /// Up to `n` keys from the front
    pub fn first_keys(&self, n: isize) -> Vec<K> {
        let table = self.read();
        let span = head_span(table.len(), n);
        let picked: Vec<_> = table
            .iter()
            .skip(span.start)
            .take(span.len())
            .map(|(k, _)| k.clone())
            .collect();
        picked
    }

    /// Last value, `None` when empty
    pub fn last(&self) -> Option<V> {
        self.at(-1)
    }

    /// Up to `n` values from the back, in snapshot order
    pub fn last_n(&self, n: isize) -> Vec<V> {
        let table = self.read();
        let span = tail_span(table.len(), n);
        let picked: Vec<_> = table
            .iter()
            .skip(span.start)
            .take(span.len())
            .map(|(_, v)| v.clone())
            .collect();
        picked
    }

    /// Last key, `None` when empty
    pub fn last_key(&self) -> Option<K> {
        self.key_at(-1)
    }

    /// Up to `n` keys from the back, in snapshot order
    pub fn last_keys(&self, n: isize) -> Vec<K> {
        let table = self.read();
        let span = tail_span(table.len(), n);
        let picked: Vec<_> = table
            .iter()
            .skip(span.start)
            .take(span.len())
            .map(|(k, _)| k.clone())
            .collect();
        picked
    }

    // =========================================================================
    // Indexed
    // =========================================================================

    /// Value at `index`
    pub fn at(&self, index: isize) -> Option<V> {
        let table = self.read();
        let position = resolve_index(table.len(), index)?;
        table.entry_at(position).map(|(_, v)| v.clone())
    }

    /// Key at `index`
    pub fn key_at(&self, index: isize) -> Option<K> {
        let table = self.read();
        let position = resolve_index(table.len(), index)?;
        table.entry_at(position).map(|(k, _)| k.clone())
    }

    // =========================================================================
    // Random
    // =========================================================================

    /// One uniformly chosen value, `None` when empty
    pub fn random(&self) -> Option<V> {
        let table = self.read();
        if table.is_empty() {
            return None;
        }
        let position = rand::thread_rng().gen_range(0..table.len());
        table.entry_at(position).map(|(_, v)| v.clone())
    }

    /// Up to `n` distinct values chosen uniformly without replacement
    pub fn random_n(&self, n: isize) -> Vec<V> {
        let table = self.read();
        let count = sample_count(table.len(), n);
        let picked: Vec<_> = sample_indices(&mut rand::thread_rng(), table.len(), count)
            .into_iter()
            .filter_map(|position| table.entry_at(position).map(|(_, v)| v.clone()))
            .collect();
        picked
    }

    /// One uniformly chosen key, `None` when empty
    pub fn random_key(&self) -> Option<K> {
        let table = self.read();
        if table.is_empty() {
            return None;
        }
        let position = rand::thread_rng().gen_range(0..table.len());
        table.entry_at(position).map(|(k, _)| k.clone())
    }

    /// Up to `n` distinct keys chosen uniformly without replacement
    pub fn random_keys(&self, n: isize) -> Vec<K> {
        let table = self.read();
        let count = sample_count(table.len(), n);
        let picked: Vec<_> = sample_indices(&mut rand::thread_rng(), table.len(), count)
            .into_iter()
            .filter_map(|position| table.entry_at(position).map(|(k, _)| k.clone()))
            .collect();
        picked
    }
}
