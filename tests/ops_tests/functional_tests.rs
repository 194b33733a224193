//! Functional Operation Tests
//!
//! Tests verify:
//! - map / map_values
//! - reduce / reduce_right order and empty behaviour
//! - merge with Keep decisions
//! - combine_entries left fold
//! - group_by ordering and index passing

use kvcollection::ops::{self, Keep};
use kvcollection::Collection;

// =============================================================================
// Helper Functions
// =============================================================================

fn abc() -> Collection<&'static str, i32> {
    vec![("a", 1), ("b", 2), ("c", 3)].into()
}

// =============================================================================
// map Tests
// =============================================================================

#[test]
fn test_map_to_sequence() {
    let labels = ops::map(&abc(), |v, k, _| format!("{}={}", k, v));
    assert_eq!(labels, vec!["a=1", "b=2", "c=3"]);
}

#[test]
fn test_map_empty() {
    let empty: Collection<&str, i32> = Collection::new();
    assert!(ops::map(&empty, |v, _, _| *v).is_empty());
}

#[test]
fn test_map_callback_sees_collection() {
    let c = abc();
    let shares = ops::map(&c, |v, _, coll| *v as f64 / coll.size() as f64);
    assert_eq!(shares.len(), 3);
    assert!((shares[2] - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_map_values() {
    let c = abc();
    let squared = ops::map_values(&c, |v, _, _| (v * v) as u64);
    assert_eq!(squared.entries(), vec![("a", 1u64), ("b", 4), ("c", 9)]);
    // source untouched
    assert_eq!(c.get(&"c"), Some(3));
}

#[test]
fn test_map_values_changes_type() {
    let strings = ops::map_values(&abc(), |v, k, _| format!("{}{}", k, v));
    assert_eq!(strings.get(&"b"), Some("b2".to_string()));
}

// =============================================================================
// reduce Tests
// =============================================================================

#[test]
fn test_reduce_sum() {
    assert_eq!(ops::reduce(&abc(), |acc, v, _, _| acc + v, 0), 6);
}

#[test]
fn test_reduce_right_sum() {
    assert_eq!(ops::reduce_right(&abc(), |acc, v, _, _| acc + v, 0), 6);
}

#[test]
fn test_reduce_empty_returns_initial() {
    let empty: Collection<&str, i32> = Collection::new();
    assert_eq!(ops::reduce(&empty, |acc, v, _, _| acc + v, 42), 42);
    assert_eq!(ops::reduce_right(&empty, |acc, v, _, _| acc + v, 42), 42);
}

#[test]
fn test_reduce_and_reduce_right_order() {
    let c = abc();
    let forward = ops::reduce(&c, |mut acc: Vec<String>, _, k, _| {
        acc.push(k.to_string());
        acc
    }, Vec::new());
    let backward = ops::reduce_right(&c, |mut acc: Vec<String>, _, k, _| {
        acc.push(k.to_string());
        acc
    }, Vec::new());
    assert_eq!(forward, vec!["a", "b", "c"]);
    assert_eq!(backward, vec!["c", "b", "a"]);
}

// =============================================================================
// merge Tests
// =============================================================================

#[test]
fn test_merge_scenario() {
    let a: Collection<&str, i32> = vec![("x", 1), ("y", 2)].into();
    let b: Collection<&str, i32> = vec![("y", 20), ("z", 30)].into();

    let merged = ops::merge(
        &a,
        &b,
        |v, _| Keep::keep(*v),
        |v, _| Keep::keep(*v),
        |l, r, _| Keep::keep(l + r),
    );

    assert_eq!(merged.entries(), vec![("x", 1), ("y", 22), ("z", 30)]);
}

#[test]
fn test_merge_calls_exactly_one_callback_per_key() {
    let a: Collection<&str, i32> = vec![("x", 1), ("y", 2)].into();
    let b: Collection<&str, i32> = vec![("y", 20), ("z", 30)].into();
    let mut calls = Vec::new();

    {
        let calls = std::cell::RefCell::new(&mut calls);
        let _ = ops::merge(
            &a,
            &b,
            |_, k| {
                calls.borrow_mut().push(format!("self:{}", k));
                Keep::keep(0)
            },
            |_, k| {
                calls.borrow_mut().push(format!("other:{}", k));
                Keep::keep(0)
            },
            |_, _, k| {
                calls.borrow_mut().push(format!("both:{}", k));
                Keep::keep(0)
            },
        );
    }

    calls.sort();
    assert_eq!(calls, vec!["both:y", "other:z", "self:x"]);
}

#[test]
fn test_merge_respects_discard() {
    let a: Collection<&str, i32> = vec![("x", 1), ("y", 2)].into();
    let b: Collection<&str, i32> = vec![("y", 20), ("z", 30)].into();
    let only_shared = ops::merge(
        &a,
        &b,
        |_, _| Keep::discard(),
        |_, _| Keep::discard(),
        |l, r, _| Keep::keep((*l, *r)),
    );
    assert_eq!(only_shared.entries(), vec![("y", (2, 20))]);
}

#[test]
fn test_merge_different_value_types() {
    let names: Collection<u32, &str> = vec![(1, "ada"), (2, "bob")].into();
    let ages: Collection<u32, u8> = vec![(2, 40), (3, 50)].into();
    let merged = ops::merge(
        &names,
        &ages,
        |n, _| Keep::keep(format!("{}:?", n)),
        |a, _| Keep::keep(format!("?:{}", a)),
        |n, a, _| Keep::keep(format!("{}:{}", n, a)),
    );
    assert_eq!(
        merged.values(),
        vec!["ada:?".to_string(), "bob:40".to_string(), "?:50".to_string()]
    );
}

#[test]
fn test_merge_with_self() {
    let a = abc();
    let doubled = ops::merge(
        &a,
        &a,
        |v, _| Keep::keep(*v),
        |v, _| Keep::keep(*v),
        |l, r, _| Keep::keep(l + r),
    );
    assert_eq!(doubled.values(), vec![2, 4, 6]);
}

// =============================================================================
// combine_entries Tests
// =============================================================================

#[test]
fn test_combine_entries_multiply_scenario() {
    let c = ops::combine_entries(vec![("k", 5), ("k", 10), ("k", 15)], |a, b, _| a * b);
    assert_eq!(c.entries(), vec![("k", 750)]);
}

#[test]
fn test_combine_entries_left_fold_order() {
    let c = ops::combine_entries(
        vec![("k", "1".to_string()), ("j", "x".to_string()), ("k", "2".to_string()), ("k", "3".to_string())],
        |existing, incoming, _| format!("({}+{})", existing, incoming),
    );
    assert_eq!(c.get(&"k"), Some("((1+2)+3)".to_string()));
    assert_eq!(c.get(&"j"), Some("x".to_string()));
}

#[test]
fn test_combine_entries_call_count() {
    let mut calls = 0;
    let c = ops::combine_entries(
        vec![("a", 1), ("b", 1), ("a", 1), ("a", 1), ("b", 1)],
        |x, y, _| {
            calls += 1;
            x + y
        },
    );
    assert_eq!(calls, 3);
    assert_eq!(c.entries(), vec![("a", 3), ("b", 2)]);
}

#[test]
fn test_combine_entries_receives_key() {
    let c = ops::combine_entries(vec![(2, 1), (2, 1)], |x, y, k| x + y + k);
    assert_eq!(c.get(&2), Some(4));
}

#[test]
fn test_combine_entries_empty() {
    let c = ops::combine_entries(Vec::<(String, i32)>::new(), |a, b, _| a + b);
    assert!(c.is_empty());
}

// =============================================================================
// group_by Tests
// =============================================================================

#[test]
fn test_group_by_even_odd_scenario() {
    let groups = ops::group_by(vec![1, 2, 3, 4, 5, 6], |item, _| {
        if item % 2 == 0 { "even" } else { "odd" }
    });
    assert_eq!(groups.get(&"even"), Some(vec![2, 4, 6]));
    assert_eq!(groups.get(&"odd"), Some(vec![1, 3, 5]));
    assert_eq!(groups.keys(), vec!["odd", "even"]);
}

#[test]
fn test_group_by_uses_input_index() {
    let groups = ops::group_by(vec!["a", "b", "c", "d", "e"], |_, index| index % 2);
    assert_eq!(groups.get(&0), Some(vec!["a", "c", "e"]));
    assert_eq!(groups.get(&1), Some(vec!["b", "d"]));
}

#[test]
fn test_group_by_empty_input() {
    let groups = ops::group_by(Vec::<i32>::new(), |item, _| *item);
    assert!(groups.is_empty());
}

#[test]
fn test_group_by_single_group() {
    let groups = ops::group_by("hello".chars(), |_, _| "all");
    assert_eq!(groups.get(&"all"), Some(vec!['h', 'e', 'l', 'l', 'o']));
}
