use std::time::Duration;

const MINUTE: u64 = 60;

/// Freshness and eviction windows for one category of keys.
///
/// Age below `fresh_for` is served from memory; age in
/// `[fresh_for, evict_after)` is served stale while a refresh runs; age at or
/// past `evict_after` is treated as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub fresh_for: Duration,
    pub evict_after: Duration,
}

impl CachePolicy {
    /// The full collection changes rarely.
    pub const COLLECTION: Self = Self {
        fresh_for: Duration::from_secs(30 * MINUTE),
        evict_after: Duration::from_secs(60 * MINUTE),
    };

    /// Detail records are read per item and kept for a shorter time.
    pub const DETAILS: Self = Self {
        fresh_for: Duration::from_secs(10 * MINUTE),
        evict_after: Duration::from_secs(30 * MINUTE),
    };

    /// Build a policy, stretching `evict_after` up to `fresh_for` if needed.
    #[must_use]
    pub fn new(fresh_for: Duration, evict_after: Duration) -> Self {
        Self {
            fresh_for,
            evict_after: evict_after.max(fresh_for),
        }
    }
}

/// Observable lifecycle of a cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    /// No usable value and nothing in flight.
    Idle,
    /// A producer is running for this key.
    Fetching,
    /// Value is inside its freshness window.
    Fresh,
    /// Value is past freshness but not yet evicted.
    Stale,
    /// The last producer failed; the next read fetches again.
    Error,
}
