use yard_cache::CachePolicy;
use yard_catalog::DEFAULT_LISTING_PAGE_SIZE;
use yard_core::view::DEFAULT_PAGE_SIZE;

/// Tunables for one [`Session`](crate::Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Page size used when draining the remote listing.
    pub listing_page_size: u32,
    /// Default rows per page for local views.
    pub view_page_size: usize,
    pub collection_policy: CachePolicy,
    pub detail_policy: CachePolicy,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            listing_page_size: DEFAULT_LISTING_PAGE_SIZE,
            view_page_size: DEFAULT_PAGE_SIZE,
            collection_policy: CachePolicy::COLLECTION,
            detail_policy: CachePolicy::DETAILS,
        }
    }
}
