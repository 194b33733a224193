//! Building collections from sequences

use std::hash::Hash;

use crate::collection::table::Table;
use crate::collection::Collection;

/// Build a collection from `(key, value)` pairs
///
/// A repeated key is folded with `combine(existing, incoming, key)`, left to
/// right, so N occurrences of a key make N - 1 calls. Keys keep the position
/// of their first occurrence.
pub fn combine_entries<K, V, I, F>(entries: I, mut combine: F) -> Collection<K, V>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = (K, V)>,
    F: FnMut(V, V, &K) -> V,
{
    let mut table = Table::new();
    for (k, v) in entries {
        table.upsert_with(k, v, &mut combine);
    }
    Collection::from_table(table)
}

/// Group `items` by `key_selector(item, index)`
///
/// `index` is the position in the input. Items keep their input order
/// inside each group; groups are ordered by first appearance.
pub fn group_by<K, T, I, F>(items: I, mut key_selector: F) -> Collection<K, Vec<T>>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
    F: FnMut(&T, usize) -> K,
{
    let mut table: Table<K, Vec<T>> = Table::new();
    for (index, item) in items.into_iter().enumerate() {
        let key = key_selector(&item, index);
        match table.get_mut(&key) {
            Some(group) => group.push(item),
            None => {
                table.insert(key, vec![item]);
            }
        }
    }
    Collection::from_table(table)
}
