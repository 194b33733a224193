//! Mapping and folding

use std::hash::Hash;

use crate::collection::table::Table;
use crate::collection::Collection;

/// Apply `f` to every entry, collecting results in snapshot order
pub fn map<K, V, R, F>(collection: &Collection<K, V>, mut f: F) -> Vec<R>
where
    F: FnMut(&V, &K, &Collection<K, V>) -> R,
{
    let table = collection.read();
    let mapped: Vec<R> = table.iter().map(|(k, v)| f(v, k, collection)).collect();
    mapped
}

/// Same keys, values replaced by `f(value, key, collection)`
pub fn map_values<K, V, R, F>(collection: &Collection<K, V>, mut f: F) -> Collection<K, R>
where
    K: Eq + Hash + Clone,
    F: FnMut(&V, &K, &Collection<K, V>) -> R,
{
    let table = collection.read();
    let mut result = Table::with_capacity(table.len());
    for (k, v) in table.iter() {
        result.insert(k.clone(), f(v, k, collection));
    }
    Collection::from_table(result)
}

/// Left fold in snapshot order; an empty collection yields `initial`
pub fn reduce<K, V, A, F>(collection: &Collection<K, V>, mut f: F, initial: A) -> A
where
    F: FnMut(A, &V, &K, &Collection<K, V>) -> A,
{
    let table = collection.read();
    let folded = table
        .iter()
        .fold(initial, |acc, (k, v)| f(acc, v, k, collection));
    folded
}

/// Fold over the reverse of snapshot order
pub fn reduce_right<K, V, A, F>(collection: &Collection<K, V>, mut f: F, initial: A) -> A
where
    F: FnMut(A, &V, &K, &Collection<K, V>) -> A,
{
    let table = collection.read();
    let folded = table
        .iter()
        .rev()
        .fold(initial, |acc, (k, v)| f(acc, v, k, collection));
    folded
}
