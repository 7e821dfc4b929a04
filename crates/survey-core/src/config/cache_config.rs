//! Result cache configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CacheConfig {
    /// Enable the result cache. Default: true.
    pub enabled: Option<bool>,
    /// Time-to-live for cached results in seconds. Default: 3600.
    pub ttl_secs: Option<u64>,
    /// Maximum cached results. Default: 1024.
    pub max_entries: Option<u64>,
}

impl CacheConfig {
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    pub fn effective_ttl_secs(&self) -> u64 {
        self.ttl_secs.unwrap_or(constants::DEFAULT_CACHE_TTL_SECS)
    }

    pub fn effective_max_entries(&self) -> u64 {
        self.max_entries
            .unwrap_or(constants::DEFAULT_CACHE_MAX_ENTRIES)
    }
}
