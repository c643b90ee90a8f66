//! Path cache tests

use std::sync::Arc;
use std::thread;

use dendro_core::path::{CacheStats, PathCache, compile, global_cache, parse};

#[test]
fn test_cached_path_equals_fresh_parse() {
    let cache = PathCache::new(16);
    let cached = cache.get_or_compile("a.b[*].c").unwrap();
    assert_eq!(*cached, parse("a.b[*].c").unwrap());
}

#[test]
fn test_stats_track_hits_and_misses() {
    let cache = PathCache::new(16);
    for _ in 0..3 {
        cache.get_or_compile("x.y").unwrap();
    }
    assert_eq!(
        cache.stats(),
        CacheStats {
            hits: 2,
            misses: 1,
            entries: 1
        }
    );
    cache.clear();
    assert_eq!(cache.stats(), CacheStats::default());
}

#[test]
fn test_concurrent_compilation_shares_entries() {
    let cache = Arc::new(PathCache::new(64));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                for i in 0..16 {
                    cache.get_or_compile(&format!("items[{i}].value")).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(cache.len(), 16);
    assert_eq!(cache.stats().hits + cache.stats().misses, 8 * 16);
}

#[test]
fn test_capacity_bound() {
    let cache = PathCache::new(10);
    for i in 0..100 {
        cache.get_or_compile(&format!("k{i}")).unwrap();
    }
    assert!(cache.len() <= 10);
}

#[test]
fn test_global_compile_uses_global_cache() {
    let first = compile("global.cache.test").unwrap();
    let second = compile("global.cache.test").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert!(!global_cache().is_empty());
}
