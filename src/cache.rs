//! Decorated route memo.
//!
//! This module provides [`DecorationCache`] — an LRU cache of decorated
//! route trees keyed by location, so repeated requests for the same location
//! during a render pass share one [`DecoratedRoutes`] instead of walking the
//! table again. It is gated behind the `cache` feature flag and uses the
//! [`lru`] crate internally.
//!
//! [`CacheStats`] tracks hits, misses, and invalidations so you can monitor
//! cache effectiveness at runtime.
//!
//! # Examples
//!
//! ```
//! use gram_routes::cache::DecorationCache;
//! use gram_routes::DecoratedRoutes;
//! use std::sync::Arc;
//!
//! let mut cache = DecorationCache::new();
//! cache.insert("/acme/proj1".to_string(), Arc::new(DecoratedRoutes::default()));
//!
//! assert!(cache.get("/acme/proj1").is_some());
//! assert_eq!(cache.stats().hits, 1);
//! ```

use crate::config::DEFAULT_CACHE_CAPACITY;
use crate::decorate::DecoratedRoutes;
use crate::{debug_log, trace_log};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Counters tracking cache hit/miss rates and invalidations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: usize,
    /// Number of cache misses.
    pub misses: usize,
    /// Number of full cache invalidations (via [`DecorationCache::clear`]).
    pub invalidations: usize,
}

impl CacheStats {
    /// Return the hit rate as a value in `0.0..=1.0`.
    ///
    /// Returns `0.0` if no lookups have been performed.
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache of decorated route trees keyed by location.
///
/// Default capacity is 64 locations.
#[derive(Debug)]
pub struct DecorationCache {
    entries: LruCache<String, Arc<DecoratedRoutes>>,
    stats: CacheStats,
}

impl DecorationCache {
    /// Create a cache with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Create a cache with a custom capacity.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Drop every entry and increment the invalidation counter.
    pub fn clear(&mut self) {
        let len = self.entries.len();
        self.entries.clear();
        self.stats.invalidations += 1;
        debug_log!(
            "Decoration cache cleared: {} entries removed ({} total invalidations, hit rate: {:.1}%)",
            len,
            self.stats.invalidations,
            self.stats.hit_rate() * 100.0
        );
    }

    /// Look up the decorated tree for `location`.
    ///
    /// Returns `None` on a cache miss. Updates hit/miss stats.
    pub fn get(&mut self, location: &str) -> Option<Arc<DecoratedRoutes>> {
        if let Some(routes) = self.entries.get(location) {
            self.stats.hits += 1;
            trace_log!("Decoration cache hit for '{}'", location);
            Some(Arc::clone(routes))
        } else {
            self.stats.misses += 1;
            trace_log!("Decoration cache miss for '{}'", location);
            None
        }
    }

    /// Store the decorated tree for `location`.
    pub fn insert(&mut self, location: String, routes: Arc<DecoratedRoutes>) {
        self.entries.push(location, routes);
    }

    /// Return a reference to the current cache statistics.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Return the number of cached locations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DecorationCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Arc<DecoratedRoutes> {
        Arc::new(DecoratedRoutes::default())
    }

    #[test]
    fn test_cache_creation() {
        let cache = DecorationCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.stats().hits, 0);
    }

    #[test]
    fn test_cache_miss_then_hit() {
        let mut cache = DecorationCache::new();
        assert!(cache.get("/acme/proj1").is_none());
        assert_eq!(cache.stats().misses, 1);

        let routes = tree();
        cache.insert("/acme/proj1".to_string(), Arc::clone(&routes));
        let cached = cache.get("/acme/proj1").unwrap();
        assert!(Arc::ptr_eq(&cached, &routes));
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn test_cache_evicts_least_recently_used() {
        let mut cache = DecorationCache::with_capacity(NonZeroUsize::new(2).unwrap());
        cache.insert("/a".to_string(), tree());
        cache.insert("/b".to_string(), tree());
        cache.get("/a");
        cache.insert("/c".to_string(), tree());

        assert_eq!(cache.len(), 2);
        assert!(cache.get("/b").is_none());
        assert!(cache.get("/a").is_some());
    }

    #[test]
    fn test_cache_clear() {
        let mut cache = DecorationCache::new();
        cache.insert("/".to_string(), tree());
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.stats().invalidations, 1);
    }

    #[test]
    fn test_hit_rate_calculation() {
        let mut cache = DecorationCache::new();
        cache.get("/a");
        cache.get("/b");
        cache.get("/c");

        cache.insert("/a".to_string(), tree());
        cache.insert("/b".to_string(), tree());

        cache.get("/a");
        cache.get("/b");

        assert_eq!(cache.stats().hits, 2);
        assert_eq!(cache.stats().misses, 3);
        assert!((cache.stats().hit_rate() - 0.4).abs() < 0.001);
    }
}
