//! Stats service: cache-first reads over a pluggable provider.
//!
//! The service owns the aggregation pipeline and the snapshot cache, and is
//! generic over the upstream [`StatsProvider`] so the network layer stays at
//! the edge. Lifetime queries are cache-first with write-through; season
//! windowed queries bypass the cache entirely, since windowed results are not
//! cacheable under a single key.
//!
//! Two concurrent misses for the same key both fetch upstream and both write;
//! the last put wins and the state stays consistent. Misses are not coalesced.

use crate::cache::CacheStore;
use crate::cli::types::AccountId;
use crate::error::Result;
use crate::stats::aggregate::Aggregator;
use crate::stats::types::{RawCounterMap, StatsSnapshot};
use std::future::Future;
use std::sync::Arc;

/// An explicit season window for time-bounded queries. Owned by the caller
/// (and refreshed by whatever scheduler tracks the current season); the
/// engine itself holds no season state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonContext {
    /// Short label for display, e.g. `"C6S4"`.
    pub name: String,
    /// Window start as Unix epoch seconds, forwarded to the provider.
    pub start_time: u64,
}

/// Result of one upstream fetch. Empty or missing stats and privacy
/// restrictions are data, not errors; transport failures surface through
/// `Result` instead.
#[derive(Debug, Clone, PartialEq)]
pub enum RawFetch {
    Counters(RawCounterMap),
    NoData,
    Private,
}

/// Upstream source of raw counter maps.
pub trait StatsProvider {
    fn fetch_raw_stats(
        &self,
        account_id: &AccountId,
        window: Option<&SeasonContext>,
    ) -> impl Future<Output = Result<RawFetch>> + Send;
}

/// What a stats lookup produced. Callers must branch on `Private`
/// explicitly; it is neither an error nor the same as `NoData`.
#[derive(Debug, Clone)]
pub enum StatsOutcome {
    Snapshot(Arc<StatsSnapshot>),
    NoData,
    Private,
}

pub struct StatsService<P> {
    provider: P,
    aggregator: Aggregator,
    cache: CacheStore,
}

impl<P: StatsProvider> StatsService<P> {
    pub fn new(provider: P, aggregator: Aggregator, cache: CacheStore) -> Self {
        Self {
            provider,
            aggregator,
            cache,
        }
    }

    /// Fetch, aggregate, and cache stats for one account.
    ///
    /// Lifetime queries (no window) check the cache first and write the
    /// computed snapshot through on success. Windowed queries go straight to
    /// the provider and are never cached. `NoData` and `Private` outcomes are
    /// not cached either; only real snapshots are.
    pub async fn get_stats(
        &self,
        account_id: &AccountId,
        window: Option<&SeasonContext>,
    ) -> Result<StatsOutcome> {
        if window.is_none() {
            if let Some(snapshot) = self.cache.get(account_id.as_str()) {
                return Ok(StatsOutcome::Snapshot(snapshot));
            }
        }

        match self.provider.fetch_raw_stats(account_id, window).await? {
            RawFetch::Counters(raw) if raw.is_empty() => Ok(StatsOutcome::NoData),
            RawFetch::Counters(raw) => {
                let snapshot = Arc::new(self.aggregator.aggregate(&raw));
                if window.is_none() {
                    self.cache.put(account_id.as_str(), Arc::clone(&snapshot));
                }
                Ok(StatsOutcome::Snapshot(snapshot))
            }
            RawFetch::NoData => Ok(StatsOutcome::NoData),
            RawFetch::Private => Ok(StatsOutcome::Private),
        }
    }

    /// Drop the cached snapshot for one account (explicit refresh flows).
    pub fn invalidate(&self, account_id: &AccountId) -> bool {
        self.cache.invalidate(account_id.as_str())
    }

    /// Run the retention sweep and report how many entries were purged.
    pub fn run_maintenance(&self) -> usize {
        self.cache.sweep()
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheConfig;
    use crate::stats::modes::ModeRegistry;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Scripted provider: pops pre-loaded responses and counts calls.
    struct StubProvider {
        responses: Mutex<VecDeque<RawFetch>>,
        calls: AtomicUsize,
    }

    impl StubProvider {
        fn new(responses: Vec<RawFetch>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl StatsProvider for StubProvider {
        fn fetch_raw_stats(
            &self,
            _account_id: &AccountId,
            _window: Option<&SeasonContext>,
        ) -> impl Future<Output = Result<RawFetch>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let next = self
                .responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(RawFetch::NoData);
            async move { Ok(next) }
        }
    }

    fn counters() -> RawFetch {
        let mut raw = RawCounterMap::new();
        raw.insert(
            "br_placetop1_keyboardmouse_m0_playlist_defaultsolo".to_string(),
            2,
        );
        raw.insert(
            "br_matchesplayed_keyboardmouse_m0_playlist_defaultsolo".to_string(),
            5,
        );
        RawFetch::Counters(raw)
    }

    fn service(responses: Vec<RawFetch>) -> StatsService<StubProvider> {
        StatsService::new(
            StubProvider::new(responses),
            Aggregator::new(ModeRegistry::default()),
            CacheStore::new(CacheConfig::default()),
        )
    }

    fn account() -> AccountId {
        AccountId::new("acct-1")
    }

    #[tokio::test]
    async fn miss_fetches_then_hit_serves_from_cache() {
        let svc = service(vec![counters()]);

        let first = svc.get_stats(&account(), None).await.unwrap();
        assert!(matches!(first, StatsOutcome::Snapshot(_)));
        assert_eq!(svc.provider.calls(), 1);

        // second read is served from cache; the stub would answer NoData
        let second = svc.get_stats(&account(), None).await.unwrap();
        let StatsOutcome::Snapshot(snapshot) = second else {
            panic!("expected cached snapshot");
        };
        assert_eq!(snapshot.modes["Solo"].wins, 2);
        assert_eq!(svc.provider.calls(), 1);
    }

    #[tokio::test]
    async fn windowed_query_bypasses_cache() {
        let svc = service(vec![counters(), counters()]);
        let season = SeasonContext {
            name: "C6S4".to_string(),
            start_time: 1_750_000_000,
        };

        let first = svc.get_stats(&account(), Some(&season)).await.unwrap();
        assert!(matches!(first, StatsOutcome::Snapshot(_)));
        // nothing was written through
        assert!(svc.cache().is_empty());

        let second = svc.get_stats(&account(), Some(&season)).await.unwrap();
        assert!(matches!(second, StatsOutcome::Snapshot(_)));
        assert_eq!(svc.provider.calls(), 2);
    }

    #[tokio::test]
    async fn no_data_and_private_pass_through_uncached() {
        let svc = service(vec![RawFetch::NoData, RawFetch::Private]);

        assert!(matches!(
            svc.get_stats(&account(), None).await.unwrap(),
            StatsOutcome::NoData
        ));
        assert!(matches!(
            svc.get_stats(&account(), None).await.unwrap(),
            StatsOutcome::Private
        ));
        assert!(svc.cache().is_empty());
        assert_eq!(svc.provider.calls(), 2);
    }

    #[tokio::test]
    async fn empty_counter_map_is_no_data() {
        let svc = service(vec![RawFetch::Counters(RawCounterMap::new())]);
        assert!(matches!(
            svc.get_stats(&account(), None).await.unwrap(),
            StatsOutcome::NoData
        ));
        assert!(svc.cache().is_empty());
    }

    #[tokio::test]
    async fn invalidate_forces_refetch() {
        let svc = service(vec![counters(), counters()]);

        svc.get_stats(&account(), None).await.unwrap();
        assert!(svc.invalidate(&account()));
        svc.get_stats(&account(), None).await.unwrap();
        assert_eq!(svc.provider.calls(), 2);
    }

    #[tokio::test]
    async fn maintenance_reports_swept_entries() {
        let svc = StatsService::new(
            StubProvider::new(vec![counters()]),
            Aggregator::new(ModeRegistry::default()),
            CacheStore::new(CacheConfig {
                serving_ttl: Duration::from_secs(0),
                retention_ttl: Duration::from_secs(0),
                capacity: 8,
            }),
        );

        svc.get_stats(&account(), None).await.unwrap();
        // zero TTLs: the entry is immediately past retention
        assert_eq!(svc.run_maintenance(), 1);
        assert_eq!(svc.run_maintenance(), 0);
    }
}
