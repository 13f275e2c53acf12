// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Projector configuration

use serde::{Deserialize, Serialize};

/// Default number of shapes kept by the process-wide projector.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Projector configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of resolved shapes kept in the LRU cache
    pub cache_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Config builder for fluent API
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    cache_capacity: Option<usize>,
}

impl ConfigBuilder {
    /// Set the cache capacity (number of distinct shapes)
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = Some(capacity);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        let defaults = Config::default();

        Config {
            cache_capacity: self.cache_capacity.unwrap_or(defaults.cache_capacity),
        }
    }
}
