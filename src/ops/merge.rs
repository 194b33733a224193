//! Three-way merge

use std::hash::Hash;

use crate::collection::set_ops::read_pair;
use crate::collection::table::Table;
use crate::collection::Collection;

/// Decision returned by the merge callbacks
///
/// `value` is only inserted into the merge result when `keep` is true.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keep<R> {
    pub keep: bool,
    pub value: R,
}

impl<R> Keep<R> {
    /// Commit `value` for this key
    pub fn keep(value: R) -> Self {
        Self { keep: true, value }
    }

    /// Leave this key out of the result
    pub fn discard() -> Self
    where
        R: Default,
    {
        Self {
            keep: false,
            value: R::default(),
        }
    }

    pub fn into_option(self) -> Option<R> {
        self.keep.then_some(self.value)
    }
}

/// Merge two collections key by key
///
/// Exactly one callback runs per key in the union of both key sets:
/// `when_in_self` for keys only in `this`, `when_in_other` for keys only in
/// `other`, `when_in_both` otherwise. Result order: keys of `this` in
/// snapshot order, then the keys only `other` has.
pub fn merge<K, V, O, R, A, B, C>(
    this: &Collection<K, V>,
    other: &Collection<K, O>,
    mut when_in_self: A,
    mut when_in_other: B,
    mut when_in_both: C,
) -> Collection<K, R>
where
    K: Eq + Hash + Clone,
    A: FnMut(&V, &K) -> Keep<R>,
    B: FnMut(&O, &K) -> Keep<R>,
    C: FnMut(&V, &O, &K) -> Keep<R>,
{
    let (left, right) = read_pair(this, other);
    let mut result = Table::new();

    for (k, v) in left.iter() {
        let decision = match right.get(k) {
            Some(ov) => when_in_both(v, ov, k),
            None => when_in_self(v, k),
        };
        if let Some(value) = decision.into_option() {
            result.insert(k.clone(), value);
        }
    }

    for (k, ov) in right.iter() {
        if left.contains(k) {
            continue;
        }
        if let Some(value) = when_in_other(ov, k).into_option() {
            result.insert(k.clone(), value);
        }
    }

    Collection::from_table(result)
}
