use std::collections::HashMap;
use std::error::Error as StdError;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use tokio::time::Instant;

use crate::error::CacheError;
use crate::key::QueryKey;
use crate::policy::{CachePolicy, EntryState};

type Flight<V> = Shared<BoxFuture<'static, Result<V, CacheError>>>;
type EntryMap<V> = Mutex<HashMap<QueryKey, Entry<V>>>;

struct Entry<V> {
    policy: CachePolicy,
    value: Option<(V, Instant)>,
    flight: Option<(u64, Flight<V>)>,
    failed: bool,
}

impl<V> Entry<V> {
    const fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            value: None,
            flight: None,
            failed: false,
        }
    }

    fn is_evicted(&self, now: Instant) -> bool {
        self.value
            .as_ref()
            .is_some_and(|(_, at)| now.duration_since(*at) >= self.policy.evict_after)
    }

    fn drop_if_evicted(&mut self, now: Instant) {
        if self.is_evicted(now) {
            self.value = None;
        }
    }

    fn state(&self, now: Instant) -> EntryState {
        if self.flight.is_some() {
            return EntryState::Fetching;
        }
        match &self.value {
            Some((_, at)) if now.duration_since(*at) < self.policy.fresh_for => EntryState::Fresh,
            Some(_) if !self.is_evicted(now) => EntryState::Stale,
            _ if self.failed => EntryState::Error,
            _ => EntryState::Idle,
        }
    }
}

/// Keyed, window-based cache of async query results.
///
/// Cloning is cheap and clones share entries. Producers run on spawned tokio
/// tasks, so a caller that stops awaiting does not cancel the fetch: the
/// result still lands in the cache for the next reader.
pub struct QueryCache<V> {
    entries: Arc<EntryMap<V>>,
    next_flight: Arc<AtomicU64>,
}

impl<V> Clone for QueryCache<V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            next_flight: Arc::clone(&self.next_flight),
        }
    }
}

impl<V> Default for QueryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> QueryCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            next_flight: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Read `key`, calling `producer` only when no usable value exists and no
    /// fetch is already running.
    ///
    /// - fresh value: returned, producer not called
    /// - fetch in flight: the existing value if any, else the in-flight result
    /// - stale value: returned immediately, one background refresh started
    /// - absent, evicted or failed: producer called and awaited
    ///
    /// `policy` is recorded on the entry and governs its windows from now on.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the producer this call awaited failed. All
    /// callers awaiting the same flight receive the same error.
    pub async fn get<F, Fut, E>(
        &self,
        key: &QueryKey,
        policy: CachePolicy,
        producer: F,
    ) -> Result<V, CacheError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>> + Send + 'static,
        E: StdError + Send + Sync + 'static,
    {
        let flight = {
            let mut entries = lock(&self.entries);
            let now = Instant::now();
            let entry = entries
                .entry(key.clone())
                .or_insert_with(|| Entry::new(policy));
            entry.policy = policy;
            entry.drop_if_evicted(now);

            match entry.state(now) {
                EntryState::Fresh => {
                    tracing::debug!(%key, "cache hit");
                    return cached_value(entry, key);
                }
                EntryState::Fetching => {
                    if let Some((value, _)) = &entry.value {
                        return Ok(value.clone());
                    }
                    tracing::debug!(%key, "joining in-flight fetch");
                    match &entry.flight {
                        Some((_, flight)) => flight.clone(),
                        None => return Err(CacheError::Aborted { key: key.to_string() }),
                    }
                }
                EntryState::Stale => {
                    tracing::debug!(%key, "serving stale value; refreshing in background");
                    let stale = cached_value(entry, key)?;
                    drop(self.launch(key, entry, producer));
                    return Ok(stale);
                }
                EntryState::Idle | EntryState::Error => {
                    tracing::debug!(%key, "cache miss");
                    self.launch(key, entry, producer)
                }
            }
        };

        flight.await
    }

    /// The cached value for `key` if one is held and not evicted. Never
    /// fetches.
    #[must_use]
    pub fn peek(&self, key: &QueryKey) -> Option<V> {
        let entries = lock(&self.entries);
        let entry = entries.get(key)?;
        if entry.is_evicted(Instant::now()) {
            return None;
        }
        entry.value.as_ref().map(|(value, _)| value.clone())
    }

    /// Current lifecycle state of `key`.
    #[must_use]
    pub fn state(&self, key: &QueryKey) -> EntryState {
        lock(&self.entries)
            .get(key)
            .map_or(EntryState::Idle, |entry| entry.state(Instant::now()))
    }

    /// Forget `key`. A fetch still in flight completes but is not stored.
    pub fn invalidate(&self, key: &QueryKey) {
        lock(&self.entries).remove(key);
    }

    /// Drop every entry that holds no usable value and has nothing in flight.
    /// Returns the number of entries removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries = lock(&self.entries);
        let before = entries.len();
        entries.retain(|_, entry| {
            entry.drop_if_evicted(now);
            entry.flight.is_some() || entry.value.is_some()
        });
        before - entries.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        lock(&self.entries).is_empty()
    }

    /// Start the producer on its own task and register it as the entry's
    /// flight. Must be called with the entry lock held.
    fn launch<F, Fut, E>(&self, key: &QueryKey, entry: &mut Entry<V>, producer: F) -> Flight<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>> + Send + 'static,
        E: StdError + Send + Sync + 'static,
    {
        let id = self.next_flight.fetch_add(1, Ordering::Relaxed);
        let fetch = producer();

        let task_entries = Arc::clone(&self.entries);
        let task_key = key.clone();
        let handle = tokio::spawn(async move {
            let result = fetch
                .await
                .map_err(|error| CacheError::producer(&task_key.to_string(), error));
            settle(&task_entries, &task_key, id, &result);
            result
        });

        let join_entries = Arc::clone(&self.entries);
        let join_key = key.clone();
        let flight = async move {
            match handle.await {
                Ok(result) => result,
                Err(join_error) => {
                    tracing::warn!(key = %join_key, %join_error, "cache producer task aborted");
                    let aborted = Err(CacheError::Aborted {
                        key: join_key.to_string(),
                    });
                    settle(&join_entries, &join_key, id, &aborted);
                    aborted
                }
            }
        }
        .boxed()
        .shared();

        entry.flight = Some((id, flight.clone()));
        entry.failed = false;
        flight
    }
}

/// Record a finished flight, unless the entry was invalidated or replaced
/// meanwhile.
fn settle<V: Clone>(
    entries: &EntryMap<V>,
    key: &QueryKey,
    id: u64,
    result: &Result<V, CacheError>,
) {
    let mut entries = lock(entries);
    let Some(entry) = entries.get_mut(key) else {
        return;
    };
    if entry.flight.as_ref().is_none_or(|(current, _)| *current != id) {
        return;
    }

    entry.flight = None;
    match result {
        Ok(value) => {
            entry.value = Some((value.clone(), Instant::now()));
            entry.failed = false;
        }
        Err(error) => {
            tracing::warn!(%key, %error, "cached query failed");
            entry.value = None;
            entry.failed = true;
        }
    }
}

fn cached_value<V: Clone>(entry: &Entry<V>, key: &QueryKey) -> Result<V, CacheError> {
    entry
        .value
        .as_ref()
        .map(|(value, _)| value.clone())
        .ok_or_else(|| CacheError::Aborted {
            key: key.to_string(),
        })
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
