//! Remote catalog connection settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use yard_catalog::{DEFAULT_BASE_URL, DEFAULT_LISTING_PAGE_SIZE};

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_listing_page_size() -> u32 {
    DEFAULT_LISTING_PAGE_SIZE
}

fn default_user_agent() -> String {
    concat!(
        "shipyard/",
        env!("CARGO_PKG_VERSION_MAJOR"),
        ".",
        env!("CARGO_PKG_VERSION_MINOR")
    )
    .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Catalog root, e.g. `https://www.swapi.tech/api`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Page size used when draining the listing.
    #[serde(default = "default_listing_page_size")]
    pub listing_page_size: u32,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout. Unset means requests never time out.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            listing_page_size: default_listing_page_size(),
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

impl CatalogConfig {
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
