//! Tests for the memoizing caches.

use std::cell::Cell;

use crate::cache::{CacheMap, CacheValue};

#[test]
fn test_cache_value_invokes_producer_once() {
    let calls = Cell::new(0u32);
    let cached = CacheValue::new(|| {
        calls.set(calls.get() + 1);
        42
    });
    assert_eq!(calls.get(), 0);
    assert_eq!(*cached.value(), 42);
    assert_eq!(*cached.value(), 42);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_cache_value_from_value_is_resolved() {
    let cached = CacheValue::from_value("ready");
    assert_eq!(*cached.value(), "ready");
}

#[test]
fn test_cache_map_invokes_producer_once_per_key() {
    let calls = Cell::new(0u32);
    let cache: CacheMap<&str, usize> = CacheMap::new(|key: &&str| {
        calls.set(calls.get() + 1);
        key.len()
    });

    assert_eq!(cache.get(&"graph"), 5);
    assert_eq!(cache.get(&"graph"), 5);
    assert_eq!(calls.get(), 1);

    assert_eq!(cache.get(&"relation"), 8);
    assert_eq!(calls.get(), 2);
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_cache_map_remove_forces_recompute() {
    let calls = Cell::new(0u32);
    let cache: CacheMap<&str, usize> = CacheMap::new(|key: &&str| {
        calls.set(calls.get() + 1);
        key.len()
    });

    assert_eq!(cache.get(&"graph"), 5);
    assert_eq!(cache.remove(&"graph"), Some(5));
    assert!(!cache.contains_key(&"graph"));
    assert_eq!(cache.get(&"graph"), 5);
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_cache_map_remove_missing_is_no_prior_value() {
    let cache: CacheMap<&str, usize> = CacheMap::new(|key: &&str| key.len());
    assert_eq!(cache.remove(&"absent"), None);
}

#[test]
fn test_cache_map_clear_evicts_all() {
    let cache: CacheMap<&str, usize> = CacheMap::new(|key: &&str| key.len());
    let _ = cache.get(&"a");
    let _ = cache.get(&"bb");
    assert_eq!(cache.len(), 2);
    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn test_cache_map_reset_yields_fresh_cache_sharing_producer() {
    let calls = Cell::new(0u32);
    let cache: CacheMap<&str, usize> = CacheMap::new(|key: &&str| {
        calls.set(calls.get() + 1);
        key.len()
    });
    let _ = cache.get(&"graph");
    assert_eq!(calls.get(), 1);

    let fresh = cache.reset();
    assert!(fresh.is_empty());
    // The original keeps its entries.
    assert_eq!(cache.len(), 1);
    // Every key is a miss in the fresh cache, even ones the original holds.
    assert_eq!(fresh.get(&"graph"), 5);
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_cache_map_entries_preserve_insertion_order() {
    let cache: CacheMap<&str, usize> = CacheMap::new(|key: &&str| key.len());
    let _ = cache.get(&"c");
    let _ = cache.get(&"a");
    let _ = cache.get(&"b");
    let keys: Vec<&str> = cache.entries().keys().copied().collect();
    assert_eq!(keys, vec!["c", "a", "b"]);

    // Removal keeps the relative order of the survivors.
    let _ = cache.remove(&"a");
    let keys: Vec<&str> = cache.entries().keys().copied().collect();
    assert_eq!(keys, vec!["c", "b"]);
}
