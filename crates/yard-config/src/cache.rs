//! Cache window configuration, in seconds.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use yard_cache::CachePolicy;

const fn default_collection_fresh_secs() -> u64 {
    CachePolicy::COLLECTION.fresh_for.as_secs()
}

const fn default_collection_evict_secs() -> u64 {
    CachePolicy::COLLECTION.evict_after.as_secs()
}

const fn default_detail_fresh_secs() -> u64 {
    CachePolicy::DETAILS.fresh_for.as_secs()
}

const fn default_detail_evict_secs() -> u64 {
    CachePolicy::DETAILS.evict_after.as_secs()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_collection_fresh_secs")]
    pub collection_fresh_secs: u64,

    #[serde(default = "default_collection_evict_secs")]
    pub collection_evict_secs: u64,

    #[serde(default = "default_detail_fresh_secs")]
    pub detail_fresh_secs: u64,

    #[serde(default = "default_detail_evict_secs")]
    pub detail_evict_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            collection_fresh_secs: default_collection_fresh_secs(),
            collection_evict_secs: default_collection_evict_secs(),
            detail_fresh_secs: default_detail_fresh_secs(),
            detail_evict_secs: default_detail_evict_secs(),
        }
    }
}

impl CacheConfig {
    /// Windows for the full collection key.
    #[must_use]
    pub fn collection_policy(&self) -> CachePolicy {
        CachePolicy::new(
            Duration::from_secs(self.collection_fresh_secs),
            Duration::from_secs(self.collection_evict_secs),
        )
    }

    /// Windows for single and multi detail keys.
    #[must_use]
    pub fn detail_policy(&self) -> CachePolicy {
        CachePolicy::new(
            Duration::from_secs(self.detail_fresh_secs),
            Duration::from_secs(self.detail_evict_secs),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_built_in_policies() {
        let config = CacheConfig::default();
        assert_eq!(config.collection_fresh_secs, 1800);
        assert_eq!(config.collection_evict_secs, 3600);
        assert_eq!(config.detail_fresh_secs, 600);
        assert_eq!(config.detail_evict_secs, 1800);
        assert_eq!(config.collection_policy(), CachePolicy::COLLECTION);
        assert_eq!(config.detail_policy(), CachePolicy::DETAILS);
    }
}
