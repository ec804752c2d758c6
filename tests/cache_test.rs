//! Cache state-machine properties: fresh / stale / purged transitions.

use brstats::{CacheConfig, CacheStore, StatsSnapshot};
use std::sync::Arc;
use std::time::{Duration, Instant};

const SERVING: Duration = Duration::from_secs(5 * 60);
const RETENTION: Duration = Duration::from_secs(60 * 60);

fn store() -> CacheStore {
    CacheStore::new(CacheConfig {
        serving_ttl: SERVING,
        retention_ttl: RETENTION,
        capacity: 32,
    })
}

fn snapshot() -> Arc<StatsSnapshot> {
    Arc::new(StatsSnapshot::default())
}

#[test]
fn hit_until_just_before_serving_ttl() {
    let cache = store();
    let t0 = Instant::now();
    cache.put_at("acct", snapshot(), t0);

    assert!(cache
        .get_at("acct", t0 + SERVING - Duration::from_millis(1))
        .is_some());
    assert!(cache
        .get_at("acct", t0 + SERVING + Duration::from_millis(1))
        .is_none());
}

#[test]
fn stale_entry_survives_until_retention() {
    let cache = store();
    let t0 = Instant::now();
    cache.put_at("acct", snapshot(), t0);

    // stale: misses but is still physically held
    assert!(cache
        .get_at("acct", t0 + SERVING + Duration::from_secs(1))
        .is_none());
    assert_eq!(cache.len(), 1);

    // a sweep before retention leaves it in place
    assert_eq!(cache.sweep_at(t0 + RETENTION - Duration::from_millis(1)), 0);
    assert_eq!(cache.len(), 1);
}

#[test]
fn sweep_past_retention_purges_and_is_idempotent() {
    let cache = store();
    let t0 = Instant::now();
    cache.put_at("acct", snapshot(), t0);

    let removed = cache.sweep_at(t0 + RETENTION + Duration::from_millis(1));
    assert_eq!(removed, 1);
    assert!(cache.is_empty());

    // nothing further to remove for that key
    assert_eq!(cache.sweep_at(t0 + RETENTION + Duration::from_secs(10)), 0);
}

#[test]
fn get_never_deletes_a_stale_entry() {
    let cache = store();
    let t0 = Instant::now();
    cache.put_at("acct", snapshot(), t0);

    let stale_time = t0 + SERVING + Duration::from_secs(30);
    for _ in 0..5 {
        assert!(cache.get_at("acct", stale_time).is_none());
    }
    assert_eq!(cache.len(), 1);
}

#[test]
fn overwrite_restarts_both_horizons() {
    let cache = store();
    let t0 = Instant::now();
    cache.put_at("acct", snapshot(), t0);

    // overwrite while stale
    let t1 = t0 + SERVING + Duration::from_secs(60);
    cache.put_at("acct", snapshot(), t1);

    assert!(cache.get_at("acct", t1 + SERVING - Duration::from_secs(1)).is_some());
    // the old insertion time no longer matters for the sweep
    assert_eq!(cache.sweep_at(t0 + RETENTION + Duration::from_secs(1)), 0);
    assert_eq!(cache.sweep_at(t1 + RETENTION), 1);
}

#[test]
fn keys_transition_independently() {
    let cache = store();
    let t0 = Instant::now();
    cache.put_at("first", snapshot(), t0);
    cache.put_at("second", snapshot(), t0 + Duration::from_secs(1800));

    let now = t0 + RETENTION;
    assert_eq!(cache.sweep_at(now), 1);
    assert!(cache.get_at("first", now).is_none());
    // "second" is stale but retained
    assert_eq!(cache.len(), 1);
    assert!(cache
        .get_at("second", t0 + Duration::from_secs(1800) + Duration::from_secs(1))
        .is_some());
}
