//! Functional Operations Module
//!
//! Free functions that read a collection and produce a sequence, a new
//! collection, or a single accumulated value. Inputs are never mutated.
//!
//! ## Operations
//! - `map` / `map_values`: per-entry transform into a `Vec` or a collection
//! - `reduce` / `reduce_right`: folds in snapshot order or its reverse
//! - `merge`: three-way merge of two collections driven by [`Keep`]
//! - `combine_entries`: build from pairs, folding duplicate keys
//! - `group_by`: bucket a sequence by a selected key

mod mappers;
mod merge;
mod builders;

pub use mappers::{map, map_values, reduce, reduce_right};
pub use merge::{merge, Keep};
pub use builders::{combine_entries, group_by};
