//! # kvcollection
//!
//! A generic, thread-safe key → value collection with:
//! - Point operations (set/get/has/delete) under a reader/writer lock
//! - Get-or-compute (`ensure`) with a double-checked commit
//! - Traversal, search, filtering and partitioning
//! - Positional and random access over a stable snapshot order
//! - Set algebra between collections
//! - Free functional operations (map, reduce, merge, combine, group-by)
//! - Export as a `[key, value]` pair list (JSON or bincode)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Application Threads                        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │          ops:: map / reduce / merge / group_by               │
//! │          Collection:: query / positional / set ops           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  RwLock     │          │   export    │
//!   │ (per coll.) │          │ (serde)     │
//!   └──────┬──────┘          └─────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │   Table     │
//!   │ (ordered)   │
//!   └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use kvcollection::{ops, Collection};
//!
//! let scores: Collection<&str, u32> = Collection::new();
//! scores.set("ada", 3).set("bob", 5);
//!
//! let total = ops::reduce(&scores, |acc, v, _, _| acc + v, 0u32);
//! assert_eq!(total, 8);
//! assert_eq!(scores.to_json().unwrap(), r#"[["ada",3],["bob",5]]"#);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod collection;
pub mod ops;
pub mod export;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{CollectionError, Result};
pub use config::Config;
pub use collection::{default_compare, Collection};
pub use ops::Keep;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of kvcollection
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
