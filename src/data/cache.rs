//! Time-bounded cache fronting the external data sources

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// TTL cache keyed by the exact request parameters
#[derive(Debug)]
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: HashMap<K, (Instant, V)>,
}

impl<K: Eq + Hash, V: Clone> TtlCache<K, V> {
    /// Create a cache whose entries expire after `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Fetch a live entry; stale entries read as misses
    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.get(key).and_then(|(at, value)| {
            if at.elapsed() < self.ttl {
                Some(value.clone())
            } else {
                None
            }
        })
    }

    /// Store a value under `key`
    pub fn insert(&mut self, key: K, value: V) {
        self.entries.insert(key, (Instant::now(), value));
    }

    /// Drop every entry, live or stale (the explicit "refresh" action)
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }

    /// Number of entries, counting stale ones not yet evicted
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache holds no entries at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_and_invalidate() {
        let mut cache: TtlCache<(String, u32), u64> = TtlCache::new(Duration::from_secs(300));
        cache.insert(("2330.TW".to_string(), 180), 42);

        assert_eq!(cache.get(&("2330.TW".to_string(), 180)), Some(42));
        assert_eq!(cache.get(&("2330.TW".to_string(), 90)), None);

        cache.invalidate_all();
        assert!(cache.is_empty());
        assert_eq!(cache.get(&("2330.TW".to_string(), 180)), None);
    }

    #[test]
    fn test_zero_ttl_always_misses() {
        let mut cache: TtlCache<u32, u32> = TtlCache::new(Duration::ZERO);
        cache.insert(1, 7);
        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.len(), 1);
    }
}
