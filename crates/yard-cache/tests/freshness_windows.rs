//! Freshness and eviction timing, driven by tokio's paused clock.

use std::convert::Infallible;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use pretty_assertions::assert_eq;
use yard_cache::{CachePolicy, EntryState, QueryCache, QueryKey};

const MINUTE: Duration = Duration::from_secs(60);

/// Producer that returns `generation-<n>` where n counts invocations.
fn generation_producer(
    calls: &Arc<AtomicUsize>,
) -> impl FnOnce() -> std::future::Ready<Result<String, Infallible>> + use<> {
    let calls = Arc::clone(calls);
    move || {
        let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
        std::future::ready(Ok(format!("generation-{n}")))
    }
}

async fn settle_refresh(cache: &QueryCache<String>, key: &QueryKey) {
    for _ in 0..16 {
        if cache.state(key) != EntryState::Fetching {
            return;
        }
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn ten_minute_window_refetches_only_after_expiry() {
    let cache = QueryCache::<String>::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let key = QueryKey::details("3");
    let policy = CachePolicy::DETAILS;
    assert_eq!(policy.fresh_for, 10 * MINUTE);

    let first = cache.get(&key, policy, generation_producer(&calls)).await.unwrap();
    assert_eq!(first, "generation-1");

    tokio::time::advance(9 * MINUTE).await;
    let at_nine = cache.get(&key, policy, generation_producer(&calls)).await.unwrap();
    assert_eq!(at_nine, "generation-1");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(cache.state(&key), EntryState::Fresh);

    tokio::time::advance(2 * MINUTE).await;
    assert_eq!(cache.state(&key), EntryState::Stale);
    let at_eleven = cache.get(&key, policy, generation_producer(&calls)).await.unwrap();
    assert_eq!(at_eleven, "generation-1", "stale value is served while refreshing");
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    let during_refresh = cache.get(&key, policy, generation_producer(&calls)).await.unwrap();
    assert_eq!(during_refresh, "generation-1");
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    settle_refresh(&cache, &key).await;
    assert_eq!(cache.state(&key), EntryState::Fresh);
    assert_eq!(cache.peek(&key).as_deref(), Some("generation-2"));
}

#[tokio::test(start_paused = true)]
async fn evicted_entry_is_fetched_as_if_absent() {
    let cache = QueryCache::<String>::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let key = QueryKey::Collection;
    let policy = CachePolicy::COLLECTION;

    cache.get(&key, policy, generation_producer(&calls)).await.unwrap();

    tokio::time::advance(61 * MINUTE).await;
    assert_eq!(cache.state(&key), EntryState::Idle);
    assert!(cache.peek(&key).is_none());

    let value = cache.get(&key, policy, generation_producer(&calls)).await.unwrap();
    assert_eq!(value, "generation-2", "evicted value must not be served");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn categories_keep_independent_windows() {
    let cache = QueryCache::<String>::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let collection = QueryKey::Collection;
    let detail = QueryKey::details("10");

    cache
        .get(&collection, CachePolicy::COLLECTION, generation_producer(&calls))
        .await
        .unwrap();
    cache
        .get(&detail, CachePolicy::DETAILS, generation_producer(&calls))
        .await
        .unwrap();

    tokio::time::advance(20 * MINUTE).await;

    assert_eq!(cache.state(&collection), EntryState::Fresh);
    assert_eq!(cache.state(&detail), EntryState::Stale);
}

#[test]
fn custom_policy_never_evicts_before_fresh_expiry() {
    let policy = CachePolicy::new(5 * MINUTE, MINUTE);
    assert_eq!(policy.evict_after, 5 * MINUTE);
}
