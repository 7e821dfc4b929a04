//! Result cache using moka.
//!
//! Keys are `operation:param:param` strings; values are the serialized
//! payloads handed to the presentation layer. The engines never see it.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use survey_core::config::CacheConfig;

/// TTL-bounded cache of serialized analysis results.
#[derive(Clone)]
pub struct ResultCache {
    cache: Option<Cache<String, Arc<serde_json::Value>>>,
}

impl ResultCache {
    /// Build from config. A disabled cache stores nothing.
    pub fn new(config: &CacheConfig) -> Self {
        if !config.effective_enabled() {
            return Self::disabled();
        }
        Self::with_limits(
            config.effective_max_entries(),
            Duration::from_secs(config.effective_ttl_secs()),
        )
    }

    pub fn with_limits(max_entries: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();
        Self { cache: Some(cache) }
    }

    pub fn disabled() -> Self {
        Self { cache: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.cache.is_some()
    }

    pub fn get(&self, key: &str) -> Option<Arc<serde_json::Value>> {
        self.cache.as_ref()?.get(key)
    }

    pub fn insert(&self, key: String, value: serde_json::Value) {
        if let Some(cache) = &self.cache {
            cache.insert(key, Arc::new(value));
        }
    }

    /// Drop every entry whose key starts with `prefix`.
    pub fn invalidate_prefix(&self, prefix: &str) {
        let Some(cache) = &self.cache else {
            return;
        };
        let stale: Vec<Arc<String>> = cache
            .iter()
            .filter(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key)
            .collect();
        tracing::debug!(prefix, count = stale.len(), "invalidating cached results");
        for key in stale {
            cache.invalidate(key.as_str());
        }
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        if let Some(cache) = &self.cache {
            cache.invalidate_all();
        }
    }

    /// Approximate number of entries.
    pub fn len(&self) -> u64 {
        self.cache.as_ref().map_or(0, |c| c.entry_count())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}

impl std::fmt::Debug for ResultCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultCache")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cache() -> ResultCache {
        ResultCache::with_limits(100, Duration::from_secs(60))
    }

    #[test]
    fn insert_and_get() {
        let cache = cache();
        cache.insert("ttest:hours_daily".to_string(), json!({"p": 0.5}));
        assert_eq!(cache.get("ttest:hours_daily").as_deref(), Some(&json!({"p": 0.5})));
        assert!(cache.get("ttest:age").is_none());
    }

    #[test]
    fn prefix_invalidation_keeps_other_keys() {
        let cache = cache();
        cache.insert("correlation:student:pearson".to_string(), json!(1));
        cache.insert("correlation:teacher:pearson".to_string(), json!(2));
        cache.insert("regression:student".to_string(), json!(3));
        cache.invalidate_prefix("correlation:");
        assert!(cache.get("correlation:student:pearson").is_none());
        assert!(cache.get("correlation:teacher:pearson").is_none());
        assert!(cache.get("regression:student").is_some());
    }

    #[test]
    fn clear_empties_cache() {
        let cache = cache();
        cache.insert("a".to_string(), json!(1));
        cache.insert("b".to_string(), json!(2));
        cache.clear();
        // entry_count may lag behind invalidation; get must not.
        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_none());
    }

    #[test]
    fn disabled_cache_stores_nothing() {
        let config = CacheConfig {
            enabled: Some(false),
            ..Default::default()
        };
        let cache = ResultCache::new(&config);
        assert!(!cache.is_enabled());
        cache.insert("a".to_string(), json!(1));
        assert!(cache.get("a").is_none());
        assert!(cache.is_empty());
    }
}
