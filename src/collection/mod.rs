//! Collection Module
//!
//! The thread-safe ordered key → value container and its methods.
//!
//! ## Layers
//! - `table`: unsynchronized ordered storage (entries + position index)
//! - `container`: the locked handle, point operations, snapshots, `ensure`
//! - `query`: traversal, search, filter/partition/sweep, flat_map
//! - `positional`: first/last/at and random sampling
//! - `ordering`: sort/reverse and their copying variants
//! - `set_ops`: union/intersection/difference/concat/equality
//!
//! ## Lock Discipline
//! ```text
//!   readers ──► read_recursive() ──┐
//!                                  ├──► RwLock<Table<K, V>>
//!   writers ──► write() ───────────┘
//!
//!   binary ops: both shared locks, lower address first
//!   ensure:     shared check → generator (no lock) → exclusive re-check
//! ```
//!
//! Callbacks may call read accessors on the collection they were handed.
//! Calling a mutator (`set`, `delete`, `sort`, ...) from inside a callback
//! deadlocks on the same handle. `tap` holds no lock and is the exception.

pub(crate) mod table;
mod container;
mod query;
mod positional;
mod ordering;
pub(crate) mod set_ops;

pub use container::Collection;
pub use ordering::default_compare;
