//! # yard-catalog
//!
//! Remote starship catalog access for Shipyard.
//!
//! - [`CatalogClient`]: paged listing and single-item detail requests against
//!   the public read-only catalog
//! - [`CatalogSource`]: the seam the rest of the data layer depends on
//! - [`fetch_all`]: drains every listing page into one collection
//!
//! Nothing here caches or retries; that policy belongs to callers.

pub mod client;
pub mod fetcher;

mod error;
mod http;

pub use client::{CatalogClient, CatalogSource, DEFAULT_BASE_URL, ListingPage};
pub use error::NetworkError;
pub use fetcher::{DEFAULT_LISTING_PAGE_SIZE, MAX_LISTING_PAGES, fetch_all};
