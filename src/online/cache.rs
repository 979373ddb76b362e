//! Time-bounded cache for remote decode results.
//!
//! Entries expire lazily: an expired entry is evicted by the read that
//! finds it. Writes replace whole entries under the lock, so readers see
//! either the old or the new value.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::core::normalize;

/// Cache key: normalized VIN plus the optional model year hint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub vin: String,
    pub year_hint: Option<u16>,
}

impl CacheKey {
    pub fn new(vin: &str, year_hint: Option<u16>) -> Self {
        Self {
            vin: normalize(vin),
            year_hint,
        }
    }
}

#[derive(Debug)]
struct Entry<V> {
    value: V,
    inserted: Instant,
}

/// A key-value store whose entries live for a fixed duration.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: Mutex<HashMap<K, Entry<V>>>,
}

impl<K: Eq + Hash, V: Clone> TtlCache<K, V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// How long an entry stays valid.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Value for `key` if present and not expired.
    pub fn get(&self, key: &K) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    /// [`get`](Self::get) against an explicit clock reading.
    ///
    /// An entry inserted at `t` is a hit while `now - t <= ttl`.
    pub fn get_at(&self, key: &K, now: Instant) -> Option<V> {
        let mut entries = self.lock();
        let entry = entries.get(key)?;
        if now.saturating_duration_since(entry.inserted) <= self.ttl {
            return Some(entry.value.clone());
        }
        entries.remove(key);
        tracing::debug!("evicted expired cache entry");
        None
    }

    /// Insert or replace the entry for `key`.
    pub fn insert(&self, key: K, value: V) {
        self.insert_at(key, value, Instant::now());
    }

    /// [`insert`](Self::insert) against an explicit clock reading.
    pub fn insert_at(&self, key: K, value: V, now: Instant) {
        self.lock().insert(
            key,
            Entry {
                value,
                inserted: now,
            },
        );
    }

    /// Whether `key` holds an unexpired entry.
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of stored entries, including expired ones not yet evicted.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<K, Entry<V>>> {
        // entries are replaced whole, so a poisoned map is still consistent
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(60);
    const EPS: Duration = Duration::from_millis(1);

    #[test]
    fn hit_before_expiry_miss_after() {
        let cache = TtlCache::new(TTL);
        let t = Instant::now();
        cache.insert_at("k", 1, t);
        assert_eq!(cache.get_at(&"k", t + TTL - EPS), Some(1));
        assert_eq!(cache.get_at(&"k", t + TTL), Some(1));
        assert_eq!(cache.get_at(&"k", t + TTL + EPS), None);
    }

    #[test]
    fn expired_entry_is_evicted_on_read() {
        let cache = TtlCache::new(TTL);
        let t = Instant::now();
        cache.insert_at("k", 1, t);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get_at(&"k", t + TTL + EPS), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn insert_replaces_and_refreshes() {
        let cache = TtlCache::new(TTL);
        let t = Instant::now();
        cache.insert_at("k", 1, t);
        cache.insert_at("k", 2, t + TTL);
        assert_eq!(cache.get_at(&"k", t + TTL + TTL - EPS), Some(2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clear_removes_everything() {
        let cache = TtlCache::new(TTL);
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.clear();
        assert!(cache.is_empty());
        assert!(!cache.contains(&"a"));
    }

    #[test]
    fn key_normalizes_vin() {
        assert_eq!(
            CacheKey::new(" 1hgcm82633a004352 ", Some(2003)),
            CacheKey::new("1HGCM82633A004352", Some(2003))
        );
        assert_ne!(
            CacheKey::new("1HGCM82633A004352", None),
            CacheKey::new("1HGCM82633A004352", Some(2003))
        );
    }

    #[test]
    fn concurrent_writers_and_readers() {
        let cache = std::sync::Arc::new(TtlCache::new(TTL));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = std::sync::Arc::clone(&cache);
                std::thread::spawn(move || {
                    for n in 0..100 {
                        cache.insert(i % 2, (i, n));
                        let _ = cache.get(&(i % 2));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cache.len(), 2);
    }
}
