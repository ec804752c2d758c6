//! Time-bounded snapshot cache.
//!
//! Each key moves through absent → fresh → stale → absent. Two independent
//! horizons apply: `serving_ttl` decides whether a read is a hit, and the
//! longer `retention_ttl` decides whether the entry is still held at all.
//! A stale entry is never deleted by `get`; only [`CacheStore::sweep`] (or an
//! overwriting `put`) removes it. An LRU capacity bound sits on top of the
//! TTLs so a long-lived process cannot grow without limit.
//!
//! The `*_at` variants take an explicit [`Instant`] so TTL transitions can be
//! exercised deterministically; the plain methods use the current time.

use crate::stats::types::StatsSnapshot;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Cache tuning knobs. `retention_ttl` is raised to `serving_ttl` at
/// construction if configured lower; an entry must outlive its servable
/// window.
#[derive(Debug, Clone, Copy)]
pub struct CacheConfig {
    pub serving_ttl: Duration,
    pub retention_ttl: Duration,
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            serving_ttl: Duration::from_secs(5 * 60),
            retention_ttl: Duration::from_secs(60 * 60),
            capacity: 256,
        }
    }
}

struct CacheEntry {
    snapshot: Arc<StatsSnapshot>,
    inserted_at: Instant,
}

/// Key/value store of computed snapshots, keyed by account id.
pub struct CacheStore {
    inner: Mutex<LruCache<String, CacheEntry>>,
    serving_ttl: Duration,
    retention_ttl: Duration,
}

impl CacheStore {
    pub fn new(config: CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.capacity.max(1)).unwrap();
        Self {
            inner: Mutex::new(LruCache::new(capacity)),
            serving_ttl: config.serving_ttl,
            retention_ttl: config.retention_ttl.max(config.serving_ttl),
        }
    }

    pub fn serving_ttl(&self) -> Duration {
        self.serving_ttl
    }

    pub fn retention_ttl(&self) -> Duration {
        self.retention_ttl
    }

    /// Return the snapshot only while the entry is fresh (age < serving TTL).
    /// Stale and absent entries are a logical miss; storage is not mutated.
    pub fn get(&self, key: &str) -> Option<Arc<StatsSnapshot>> {
        self.get_at(key, Instant::now())
    }

    pub fn get_at(&self, key: &str, now: Instant) -> Option<Arc<StatsSnapshot>> {
        let mut inner = self.inner.lock().unwrap();
        let entry = inner.get(key)?;
        if now.duration_since(entry.inserted_at) < self.serving_ttl {
            Some(Arc::clone(&entry.snapshot))
        } else {
            None
        }
    }

    /// Unconditionally overwrite the key to fresh, regardless of prior state.
    pub fn put(&self, key: &str, snapshot: Arc<StatsSnapshot>) {
        self.put_at(key, snapshot, Instant::now());
    }

    pub fn put_at(&self, key: &str, snapshot: Arc<StatsSnapshot>, now: Instant) {
        let mut inner = self.inner.lock().unwrap();
        inner.put(
            key.to_string(),
            CacheEntry {
                snapshot,
                inserted_at: now,
            },
        );
    }

    /// Remove one entry regardless of its state. Returns whether it existed.
    pub fn invalidate(&self, key: &str) -> bool {
        self.inner.lock().unwrap().pop(key).is_some()
    }

    /// Delete every entry whose age has reached the retention TTL and return
    /// the count removed.
    pub fn sweep(&self) -> usize {
        self.sweep_at(Instant::now())
    }

    pub fn sweep_at(&self, now: Instant) -> usize {
        let mut inner = self.inner.lock().unwrap();
        let expired: Vec<String> = inner
            .iter()
            .filter(|(_, entry)| now.duration_since(entry.inserted_at) >= self.retention_ttl)
            .map(|(key, _)| key.clone())
            .collect();
        for key in &expired {
            inner.pop(key);
        }
        expired.len()
    }

    /// Number of entries physically held, fresh or stale.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
