//! # yard-cache
//!
//! In-memory query cache for the Shipyard data layer.
//!
//! Each [`QueryKey`] owns at most one entry. Reads inside the freshness window
//! are served from memory; reads in the stale band return the old value and
//! start one background refresh; reads past the eviction window fetch again.
//! Concurrent reads of a key that is being fetched attach to the same
//! in-flight producer instead of starting another.

mod cache;
mod error;
mod key;
mod policy;

pub use cache::QueryCache;
pub use error::CacheError;
pub use key::QueryKey;
pub use policy::{CachePolicy, EntryState};
