use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;

use super::*;
use crate::logic::loader::FetchError;
use crate::logic::records::UserBehaviorRecord;

// ============================================================================
// FAKES
// ============================================================================

#[derive(Clone, Default)]
struct FakeClock(Arc<AtomicI64>);

impl FakeClock {
    fn advance(&self, ms: i64) {
        self.0.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for FakeClock {
    fn now_millis(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Clone, Default)]
struct CountingLoader {
    calls: Arc<AtomicUsize>,
    fail: Arc<AtomicBool>,
}

impl CountingLoader {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl RecordLoader for CountingLoader {
    async fn load(&self) -> Result<Vec<UserBehaviorRecord>, LoadError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail.load(Ordering::SeqCst) {
            return Err(LoadError::new(FetchError::Status(500)));
        }
        // One record per call so replacements are observable
        Ok(vec![UserBehaviorRecord {
            report_date: "2025-11-01".into(),
            user_id_masked: format!("u{}", n),
            current_segment: "L3".into(),
            previous_segment: "L3".into(),
            total_sessions: 1,
            avg_session_duration: 60,
            personalized_ctr: 4.0,
            top_interest_topic: "Thời sự".into(),
            golden_hour: 8,
            is_churn_risk: false,
        }])
    }
}

/// Call `n` waits on `gates[n]` before returning its record
#[derive(Clone)]
struct GatedLoader {
    inner: CountingLoader,
    gates: Arc<Vec<Notify>>,
}

impl GatedLoader {
    fn new(calls: usize) -> Self {
        Self {
            inner: CountingLoader::default(),
            gates: Arc::new((0..calls).map(|_| Notify::new()).collect()),
        }
    }

    fn release(&self, call: usize) {
        self.gates[call].notify_one();
    }
}

#[async_trait]
impl RecordLoader for GatedLoader {
    async fn load(&self) -> Result<Vec<UserBehaviorRecord>, LoadError> {
        let call = self.inner.calls();
        let records = self.inner.load().await?;
        self.gates[call].notified().await;
        Ok(records)
    }
}

async fn wait_for_calls(loader: &GatedLoader, n: usize) {
    for _ in 0..100 {
        if loader.inner.calls() >= n {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("loader reached {} calls, expected {}", loader.inner.calls(), n);
}

fn setup() -> (FreshnessCache<CountingLoader, FakeClock>, CountingLoader, FakeClock) {
    let loader = CountingLoader::default();
    let clock = FakeClock::default();
    let cache = FreshnessCache::with_clock(loader.clone(), clock.clone());
    (cache, loader, clock)
}

// ============================================================================
// TESTS
// ============================================================================

#[tokio::test]
async fn test_second_call_within_window_hits_cache() {
    let (cache, loader, clock) = setup();

    let first = cache.get_records(false).await.unwrap();
    clock.advance(59_999);
    let second = cache.get_records(false).await.unwrap();

    assert_eq!(loader.calls(), 1);
    assert!(Arc::ptr_eq(&first, &second));
}

#[tokio::test]
async fn test_call_after_window_refetches() {
    let (cache, loader, clock) = setup();

    cache.get_records(false).await.unwrap();
    clock.advance(60_000);
    let records = cache.get_records(false).await.unwrap();

    assert_eq!(loader.calls(), 2);
    assert_eq!(records[0].user_id_masked, "u2");
}

#[tokio::test]
async fn test_force_refresh_always_fetches() {
    let (cache, loader, _clock) = setup();

    cache.get_records(false).await.unwrap();
    cache.get_records(true).await.unwrap();
    cache.get_records(true).await.unwrap();

    assert_eq!(loader.calls(), 3);
}

#[tokio::test]
async fn test_failed_refresh_keeps_snapshot() {
    let (cache, loader, clock) = setup();

    cache.get_records(false).await.unwrap();
    loader.set_failing(true);

    let err = cache.get_records(true).await.unwrap_err();
    assert_eq!(err.cause(), &FetchError::Status(500));

    let snapshot = cache.snapshot().unwrap();
    assert_eq!(snapshot.records[0].user_id_masked, "u1");
    assert_eq!(snapshot.fetched_at, 0);

    // Still fresh, so a normal call is served from the kept snapshot
    clock.advance(1_000);
    let records = cache.get_records(false).await.unwrap();
    assert_eq!(records[0].user_id_masked, "u1");
    assert_eq!(loader.calls(), 2);
}

#[tokio::test]
async fn test_first_load_failure_leaves_cache_empty() {
    let (cache, loader, _clock) = setup();
    loader.set_failing(true);

    assert!(cache.get_records(false).await.is_err());
    assert!(cache.snapshot().is_none());
    assert!(!cache.is_fresh());
}

#[tokio::test]
async fn test_custom_window() {
    let (cache, loader, clock) = setup();
    let cache = cache.with_window(10);

    cache.get_records(false).await.unwrap();
    assert!(cache.is_fresh());
    clock.advance(10);
    assert!(!cache.is_fresh());
    cache.get_records(false).await.unwrap();

    assert_eq!(loader.calls(), 2);
}

#[tokio::test]
async fn test_overlapping_loads_last_to_finish_wins() {
    let loader = GatedLoader::new(2);
    let clock = FakeClock::default();
    let cache = Arc::new(FreshnessCache::with_clock(loader.clone(), clock.clone()));

    let first = {
        let cache = Arc::clone(&cache);
        tokio::spawn(async move { cache.get_records(true).await })
    };
    wait_for_calls(&loader, 1).await;

    clock.advance(5);
    let second = {
        let cache = Arc::clone(&cache);
        tokio::spawn(async move { cache.get_records(true).await })
    };
    wait_for_calls(&loader, 2).await;

    // Newer load finishes first, older one overwrites it
    loader.release(1);
    let newer = second.await.unwrap().unwrap();
    assert_eq!(newer[0].user_id_masked, "u2");
    assert_eq!(cache.snapshot().unwrap().records[0].user_id_masked, "u2");

    loader.release(0);
    let older = first.await.unwrap().unwrap();
    assert_eq!(older[0].user_id_masked, "u1");

    let snapshot = cache.snapshot().unwrap();
    assert_eq!(snapshot.records[0].user_id_masked, "u1");
    assert_eq!(snapshot.fetched_at, 0);
}
