//! Configuration for kvcollection
//!
//! Construction-time settings for a [`Collection`](crate::Collection).

use crate::error::{CollectionError, Result};

/// Upper bound accepted for `initial_capacity` (entries, not bytes)
pub const MAX_INITIAL_CAPACITY: usize = 1 << 28;

/// Construction settings for a collection instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Number of entries to pre-allocate room for
    pub initial_capacity: usize,

    // -------------------------------------------------------------------------
    // Diagnostics
    // -------------------------------------------------------------------------
    /// Name attached to every tracing event the collection emits
    pub label: Option<String>,
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the settings before a collection is built from them
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(CollectionError::Config(format!(
                "initial_capacity {} exceeds maximum of {}",
                self.initial_capacity, MAX_INITIAL_CAPACITY
            )));
        }
        if let Some(label) = &self.label {
            if label.trim().is_empty() {
                return Err(CollectionError::Config(
                    "label must not be blank".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the number of entries to pre-allocate
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Set the label used in tracing output
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.config.label = Some(label.into());
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
