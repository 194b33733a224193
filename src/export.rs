//! Export Module
//!
//! One-way export of a collection as a list of `[key, value]` pairs.
//!
//! ## Format
//! ```text
//! [[k1, v1], [k2, v2], ...]     (empty collection → [])
//! ```
//!
//! The pair list is taken under a shared lock, in snapshot order. JSON goes
//! through `serde_json`; the same sequence can be written as compact binary
//! through `bincode`. There is no import path.

use serde::ser::{Serialize, Serializer};

use crate::collection::Collection;
use crate::error::Result;

impl<K: Serialize, V: Serialize> Serialize for Collection<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let table = self.read();
        let written = serializer.collect_seq(table.iter());
        written
    }
}

impl<K: Serialize, V: Serialize> Collection<K, V> {
    /// JSON text of the pair list
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON text of the pair list
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// JSON bytes of the pair list
    pub fn to_json_vec(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Bincode encoding of the pair list
    pub fn to_bincode(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }
}
