//! Bounded concurrent cache of compiled paths

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use dashmap::DashMap;
use once_cell::sync::Lazy;

use super::{ast::Path, tokenizer::PathParser};
use crate::error::ParseResult;

/// Default number of compiled paths kept by the global cache
pub const DEFAULT_CAPACITY: usize = 4096;

static GLOBAL_CACHE: Lazy<PathCache> = Lazy::new(|| PathCache::new(DEFAULT_CAPACITY));

/// The process-wide cache used by [`compile`](crate::path::compile)
#[inline]
pub fn global_cache() -> &'static PathCache {
    &GLOBAL_CACHE
}

/// Snapshot of cache counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Lookups answered from the cache
    pub hits: u64,
    /// Lookups that had to parse
    pub misses: u64,
    /// Paths currently cached
    pub entries: usize,
}

/// Concurrent path cache with a soft capacity
///
/// When an insert would exceed the capacity a tenth of the entries (at least
/// one) is evicted first.
#[derive(Debug)]
pub struct PathCache {
    entries: DashMap<String, Arc<Path>>,
    capacity: AtomicUsize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PathCache {
    /// Create an empty cache holding at most `capacity` paths
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: DashMap::new(),
            capacity: AtomicUsize::new(capacity.max(1)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Return the cached path for `path`, parsing and inserting it on a miss
    ///
    /// # Errors
    /// Returns the parse error for malformed paths; nothing is cached then.
    pub fn get_or_compile(&self, path: &str) -> ParseResult<Arc<Path>> {
        if let Some(entry) = self.entries.get(path) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(Arc::clone(entry.value()));
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        log::debug!("Path cache miss for '{path}'");
        let compiled = Arc::new(PathParser::new(path).parse()?);

        if self.entries.len() >= self.capacity() {
            self.evict_entries();
        }
        let entry = self
            .entries
            .entry(path.to_string())
            .or_insert_with(|| Arc::clone(&compiled));
        Ok(Arc::clone(entry.value()))
    }

    /// Change the capacity; shrinking evicts down to the new bound
    pub fn set_capacity(&self, capacity: usize) {
        let capacity = capacity.max(1);
        self.capacity.store(capacity, Ordering::Relaxed);
        while self.entries.len() > capacity {
            self.evict_entries();
        }
    }

    /// Current capacity
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity.load(Ordering::Relaxed)
    }

    /// Remove every cached path and reset counters
    pub fn clear(&self) {
        self.entries.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Get current cache size
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if cache is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counter snapshot
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.len(),
        }
    }

    fn evict_entries(&self) {
        let count = (self.capacity() / 10).max(1);
        let to_remove: Vec<String> = self
            .entries
            .iter()
            .take(count)
            .map(|entry| entry.key().clone())
            .collect();

        for key in to_remove {
            self.entries.remove(&key);
        }

        log::debug!("Evicted compiled paths, cache size: {}", self.entries.len());
    }
}

impl Default for PathCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_hits_and_misses() {
        let cache = PathCache::new(8);
        cache.get_or_compile("a.b").unwrap();
        cache.get_or_compile("a.b").unwrap();
        cache.get_or_compile("c").unwrap();
        assert_eq!(
            cache.stats(),
            CacheStats {
                hits: 1,
                misses: 2,
                entries: 2
            }
        );
    }

    #[test]
    fn errors_are_not_cached() {
        let cache = PathCache::new(8);
        assert!(cache.get_or_compile("a[").is_err());
        assert!(cache.get_or_compile("a[").is_err());
        assert!(cache.is_empty());
        assert_eq!(cache.stats().misses, 2);
    }

    #[test]
    fn stays_within_capacity() {
        let cache = PathCache::new(3);
        for name in ["a", "b", "c", "d", "e"] {
            cache.get_or_compile(name).unwrap();
        }
        assert!(cache.len() <= 3);
        cache.set_capacity(1);
        assert_eq!(cache.len(), 1);
    }
}
